//! Time model for duty logs.
//!
//! # Design
//!
//! All scheduling arithmetic is carried out in whole [`Minutes`].  Duty logs
//! are minute-precise, and an integer unit means accumulators compare
//! exactly against caps (no floating-point drift after dozens of chunks).
//!
//! Wall-clock instants are `chrono::NaiveDateTime` in the trip's local zone.
//! Zone resolution belongs to the caller; every calendar computation here
//! (midnight, end of day) is local by construction.
//!
//! The one sub-minute instant in a log is the end of the final day,
//! `23:59:59.999`, so hour totals are computed at millisecond resolution.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::{CoreError, CoreResult};

pub const MINUTES_PER_HOUR: i64 = 60;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: i64 = 86_400_000;

// ── Minutes ───────────────────────────────────────────────────────────────────

/// A signed span of whole minutes.
///
/// Signed so that "remaining before cap" can go negative when a profile is
/// already over a limit; callers clamp with [`Minutes::max`] where needed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub i64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    /// Convert decimal hours to the nearest whole minute.
    ///
    /// Non-finite input maps to `None`.
    pub fn from_hours(hours: f64) -> Option<Minutes> {
        let m = (hours * MINUTES_PER_HOUR as f64).round();
        if !m.is_finite() || m.abs() > i64::MAX as f64 / 2.0 {
            return None;
        }
        Some(Minutes(m as i64))
    }

    #[inline]
    pub fn as_hours(self) -> f64 {
        self.0 as f64 / MINUTES_PER_HOUR as f64
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// As a `chrono` span, or `None` if it does not fit.
    #[inline]
    pub fn to_delta(self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.0)
    }
}

impl std::ops::Add for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Minutes {
    #[inline]
    fn add_assign(&mut self, rhs: Minutes) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Minutes {
    type Output = Minutes;
    #[inline]
    fn sub(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Minutes {
    #[inline]
    fn sub_assign(&mut self, rhs: Minutes) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}h{:02}m", abs / 60, abs % 60)
    }
}

// ── Instant arithmetic ────────────────────────────────────────────────────────

/// `t + span`, failing instead of panicking at the edges of the calendar.
pub fn advance(t: NaiveDateTime, span: Minutes) -> CoreResult<NaiveDateTime> {
    span.to_delta()
        .and_then(|d| t.checked_add_signed(d))
        .ok_or_else(|| CoreError::OutOfRange(format!("{t} + {span}")))
}

/// Elapsed decimal hours from `start` to `end` at millisecond resolution.
#[inline]
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

// ── Calendar days ─────────────────────────────────────────────────────────────

/// Local midnight at the start of `t`'s calendar day.
#[inline]
pub fn start_of_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// Local midnight at the start of the day after `t`.
pub fn next_midnight(t: NaiveDateTime) -> CoreResult<NaiveDateTime> {
    t.date()
        .checked_add_days(Days::new(1))
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| CoreError::OutOfRange(format!("day after {}", t.date())))
}

/// `23:59:59.999` on `date`, the closing instant of a daily log.
pub fn end_of_day(date: NaiveDate) -> CoreResult<NaiveDateTime> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::milliseconds(MILLIS_PER_DAY - 1))
        .ok_or_else(|| CoreError::OutOfRange(format!("end of {date}")))
}

// ── Parsing ───────────────────────────────────────────────────────────────────

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 local timestamp and truncate it to the minute.
///
/// An explicit UTC offset is accepted and dropped: the wall-clock reading is
/// kept as-is, since the log is kept in the driver's home-terminal time.
pub fn parse_timestamp(s: &str) -> CoreResult<NaiveDateTime> {
    let s = s.trim();
    let parsed = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
        .ok_or_else(|| CoreError::InvalidTimestamp(s.to_owned()))?;
    Ok(truncate_to_minute(parsed))
}

/// Drop seconds and sub-second components.
#[inline]
pub fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t)
}
