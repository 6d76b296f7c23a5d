//! Splitting an event sequence at local midnights.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::trace;

use hos_core::DutyEvent;
use hos_core::time::next_midnight;

use crate::{DailyLog, LogError, LogResult};

/// Partition `events` into one [`DailyLog`] per calendar date they touch,
/// sorted ascending by date.
///
/// Precondition: `events` are time-ordered and contiguous, as produced by
/// the scheduler.  This is not re-checked here; see
/// [`check_contiguous`][crate::check_contiguous].
pub fn split_events_into_days(
    events:            &[DutyEvent],
    average_speed_mph: f64,
) -> LogResult<Vec<DailyLog>> {
    if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
        return Err(LogError::InvalidSpeed(average_speed_mph));
    }

    let mut days: BTreeMap<NaiveDate, DailyLog> = BTreeMap::new();

    for event in events {
        let mut cursor = event.start;
        while cursor < event.end {
            let piece_end = event.end.min(next_midnight(cursor)?);
            if piece_end < event.end {
                trace!(kind = ?event.kind, at = %piece_end, "splitting event at midnight");
            }
            let date = cursor.date();
            days.entry(date)
                .or_insert_with(|| DailyLog::new(date))
                .push(event.clipped(cursor, piece_end), average_speed_mph);
            cursor = piece_end;
        }
    }

    Ok(days.into_values().collect())
}
