//! Error types for hos-log.

use chrono::NaiveDateTime;
use hos_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LogError {
    #[error("average speed must be a positive, finite number of mph, got {0}")]
    InvalidSpeed(f64),

    #[error("event {index} is empty or reversed ({start} → {end})")]
    EmptyEvent {
        index: usize,
        start: NaiveDateTime,
        end:   NaiveDateTime,
    },

    #[error("event {index} starts at {start} but the previous event ended at {previous_end}")]
    Discontinuity {
        index:        usize,
        previous_end: NaiveDateTime,
        start:        NaiveDateTime,
    },

    #[error("{0}")]
    Time(#[from] CoreError),
}

/// Alias for `Result<T, LogError>`.
pub type LogResult<T> = Result<T, LogError>;
