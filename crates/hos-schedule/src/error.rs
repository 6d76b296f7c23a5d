use hos_core::{CoreError, Minutes};
use hos_profile::ProfileError;
use hos_route::RouteError;
use thiserror::Error;

use crate::Constraint;

/// Scheduling failures.
///
/// Invalid-input variants are raised before any event is produced; the
/// remaining variants mean the profile and route cannot be reconciled by the
/// algorithm.  See [`ScheduleError::is_invalid_input`].
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("average speed must be a positive, finite number of mph, got {0}")]
    InvalidSpeed(f64),

    #[error("invalid start time: {0}")]
    InvalidStartTime(CoreError),

    #[error("invalid route: {0}")]
    Route(#[from] RouteError),

    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("schedule leaves the representable calendar: {0}")]
    Time(#[from] CoreError),

    #[error("leg {leg} cannot be completed: {remaining} of driving left with the {binding} exhausted")]
    LegUnresolved {
        leg:       u8,
        remaining: Minutes,
        binding:   Constraint,
    },

    #[error("scheduling stalled on leg {leg}: no completion after {steps} steps")]
    Stalled { leg: u8, steps: usize },
}

impl ScheduleError {
    /// `true` for errors caused by malformed inputs (fix the input and
    /// retry); `false` for scheduling-invariant failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidSpeed(_)
                | ScheduleError::InvalidStartTime(_)
                | ScheduleError::Route(_)
                | ScheduleError::Profile(_)
                | ScheduleError::Time(_)
        )
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
