//! Observer hooks for inspecting a scheduling run.

use hos_core::DutyEvent;

use crate::ShiftState;

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: rest counter
///
/// ```rust,ignore
/// struct RestCounter(usize);
///
/// impl ScheduleObserver for RestCounter {
///     fn on_rest(&mut self, _state: &ShiftState) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called after each event is appended, with the state as updated by it.
    fn on_event(&mut self, _event: &DutyEvent, _state: &ShiftState) {}

    /// Called right after a full rest has reset the shift accumulators.
    fn on_rest(&mut self, _state: &ShiftState) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
