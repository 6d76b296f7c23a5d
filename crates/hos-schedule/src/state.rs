//! Per-run shift state and the drivable-chunk computation.
//!
//! `ShiftState` is owned by one scheduling run and mutated only through the
//! transition methods below, so each step of the state machine can be
//! exercised on its own in tests.

use std::fmt;

use chrono::NaiveDateTime;

use hos_core::{DutyStatus, Minutes};
use hos_profile::ShiftLimits;

// ── Constraint ────────────────────────────────────────────────────────────────

/// Which limit bounds the next driving chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Driving time left on the current leg.
    LegRemaining,
    /// Driving allowed in the current shift.
    DrivingCap,
    /// Duty window left in the current shift.
    DutyWindow,
    /// Driving allowed before a break is due.
    BreakDue,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Constraint::LegRemaining => "leg time",
            Constraint::DrivingCap   => "shift driving cap",
            Constraint::DutyWindow   => "shift duty window",
            Constraint::BreakDue     => "driving allowed before a break",
        })
    }
}

/// The largest driving chunk allowed right now and the limit that set it.
///
/// `chunk` is never negative; `binding` is the first limit (in
/// [`Constraint`] declaration order) among those tied at the minimum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriveBudget {
    pub chunk:   Minutes,
    pub binding: Constraint,
}

// ── ShiftState ────────────────────────────────────────────────────────────────

/// Accumulators threaded through one scheduling run.
///
/// The four shift accumulators (`shift_driving`, `shift_on_duty`,
/// `shift_duty_window`, `driving_since_break`) all return to zero after a
/// full rest.  `distance_miles` is true driving distance only.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftState {
    pub now: NaiveDateTime,

    pub distance_miles:   f64,
    pub miles_since_fuel: f64,

    pub shift_driving:       Minutes,
    pub shift_on_duty:       Minutes,
    pub shift_duty_window:   Minutes,
    pub driving_since_break: Minutes,
}

impl ShiftState {
    /// A fresh shift starting at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            distance_miles:      0.0,
            miles_since_fuel:    0.0,
            shift_driving:       Minutes::ZERO,
            shift_on_duty:       Minutes::ZERO,
            shift_duty_window:   Minutes::ZERO,
            driving_since_break: Minutes::ZERO,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The next drivable chunk given `remaining` leg time.
    pub fn drive_budget(&self, limits: &ShiftLimits, remaining: Minutes) -> DriveBudget {
        let candidates = [
            (remaining, Constraint::LegRemaining),
            (limits.max_driving - self.shift_driving, Constraint::DrivingCap),
            (limits.max_duty_window - self.shift_duty_window, Constraint::DutyWindow),
            (limits.break_after - self.driving_since_break, Constraint::BreakDue),
        ];
        // min_by_key keeps the first of equal elements.
        let (chunk, binding) = candidates
            .into_iter()
            .min_by_key(|&(m, _)| m)
            .unwrap_or((Minutes::ZERO, Constraint::LegRemaining));
        DriveBudget { chunk: chunk.max(Minutes::ZERO), binding }
    }

    /// `true` once driving since the last break has reached the threshold.
    #[inline]
    pub fn break_due(&self, limits: &ShiftLimits) -> bool {
        self.driving_since_break >= limits.break_after
    }

    /// `true` once the shift's driving cap or duty window is used up.
    #[inline]
    pub fn rest_due(&self, limits: &ShiftLimits) -> bool {
        self.shift_driving >= limits.max_driving
            || self.shift_duty_window >= limits.max_duty_window
    }

    #[inline]
    pub fn fuel_due(&self, limits: &ShiftLimits) -> bool {
        self.miles_since_fuel >= limits.fuel_interval_miles
    }

    /// `true` if every shift accumulator is zero.
    pub fn is_fresh_shift(&self) -> bool {
        self.shift_driving == Minutes::ZERO
            && self.shift_on_duty == Minutes::ZERO
            && self.shift_duty_window == Minutes::ZERO
            && self.driving_since_break == Minutes::ZERO
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Charge `span` in `status` to the accumulators its profile flags name.
    pub fn record(&mut self, limits: &ShiftLimits, status: DutyStatus, span: Minutes) {
        let flags = limits.flags(status);
        if flags.counts_toward_driving {
            self.shift_driving += span;
            self.driving_since_break += span;
        }
        if flags.counts_toward_on_duty {
            self.shift_on_duty += span;
        }
        if flags.counts_toward_duty_window {
            self.shift_duty_window += span;
        }
    }

    /// Advance the true odometer by `miles` of driving.
    pub fn record_miles(&mut self, miles: f64) {
        self.distance_miles += miles;
        self.miles_since_fuel += miles;
    }

    /// A qualifying break: clears driving-since-break only.
    pub fn take_break(&mut self) {
        self.driving_since_break = Minutes::ZERO;
    }

    pub fn refuel(&mut self) {
        self.miles_since_fuel = 0.0;
    }

    /// A full rest: starts a new shift.
    pub fn rest(&mut self) {
        self.shift_driving = Minutes::ZERO;
        self.shift_on_duty = Minutes::ZERO;
        self.shift_duty_window = Minutes::ZERO;
        self.driving_since_break = Minutes::ZERO;
    }
}
