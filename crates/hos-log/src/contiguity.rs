//! Sequence invariant check.

use hos_core::DutyEvent;

use crate::{LogError, LogResult};

/// Verify that every event has positive length and starts exactly where the
/// previous one ended.  Reports the first violation.
pub fn check_contiguous(events: &[DutyEvent]) -> LogResult<()> {
    for (index, e) in events.iter().enumerate() {
        if e.start >= e.end {
            return Err(LogError::EmptyEvent { index, start: e.start, end: e.end });
        }
        if index > 0 {
            let previous_end = events[index - 1].end;
            if previous_end != e.start {
                return Err(LogError::Discontinuity { index, previous_end, start: e.start });
            }
        }
    }
    Ok(())
}
