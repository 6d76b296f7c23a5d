//! A validated profile expressed in whole minutes.
//!
//! The scheduler never reads `HosProfile` directly: it asks for
//! `ShiftLimits`, which fails up front on any value that would stall or
//! corrupt the simulation (non-finite, negative, or shorter than a minute).

use hos_core::{DutyStatus, Minutes};

use crate::{HosProfile, ProfileError, ProfileResult, StatusFlags, StatusRules};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShiftLimits {
    pub statuses: StatusRules,

    pub max_driving:      Minutes,
    pub max_duty_window:  Minutes,
    pub min_off_duty:     Minutes,
    pub break_after:      Minutes,
    pub break_duration:   Minutes,

    pub fuel_interval_miles: f64,
    pub fuel_stop:           Minutes,

    pub pre_trip:  Minutes,
    pub pickup:    Minutes,
    pub dropoff:   Minutes,
    pub post_trip: Minutes,
}

impl ShiftLimits {
    #[inline]
    pub fn flags(&self, status: DutyStatus) -> StatusFlags {
        self.statuses.flags(status)
    }
}

impl HosProfile {
    /// Validate the profile and convert every duration to whole minutes.
    pub fn limits(&self) -> ProfileResult<ShiftLimits> {
        let shift = &self.shift;
        let brk = &self.break_rule;
        let blocks = &self.blocks;

        if !self.statuses.sleeper_berth.qualifies_as_rest {
            return Err(ProfileError::invalid(
                "statuses.sleeperBerth.qualifiesAsRest",
                "the shift-reset rest is logged as sleeper berth and must qualify as rest",
            ));
        }
        if self.statuses.off_duty.counts_toward_driving {
            return Err(ProfileError::invalid(
                "statuses.offDuty.countsTowardDriving",
                "breaks are logged off duty and cannot count as driving",
            ));
        }

        let fuel_interval_miles = self.fuel.interval_miles;
        if !fuel_interval_miles.is_finite() || fuel_interval_miles <= 0.0 {
            return Err(ProfileError::invalid(
                "fuel.intervalMiles",
                format!("must be a positive number of miles, got {fuel_interval_miles}"),
            ));
        }

        Ok(ShiftLimits {
            statuses:        self.statuses,
            max_driving:     hours("shift.maxDrivingHours", shift.max_driving_hours)?,
            max_duty_window: hours("shift.maxDutyWindowHours", shift.max_duty_window_hours)?,
            min_off_duty:    hours(
                "shift.minOffDutyBeforeShiftHours",
                shift.min_off_duty_before_shift_hours,
            )?,
            break_after:     hours(
                "break.requiredAfterDrivingHours",
                brk.required_after_driving_hours,
            )?,
            break_duration:  minutes("break.breakDurationMinutes", brk.break_duration_minutes)?,
            fuel_interval_miles,
            fuel_stop:       hours("fuel.stopHours", self.fuel.stop_hours)?,
            pre_trip:        hours("blocks.preTripHours", blocks.pre_trip_hours)?,
            pickup:          hours("blocks.pickupHours", blocks.pickup_hours)?,
            dropoff:         hours("blocks.dropoffHours", blocks.dropoff_hours)?,
            post_trip:       hours("blocks.postTripHours", blocks.post_trip_hours)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hours(field: &'static str, value: f64) -> ProfileResult<Minutes> {
    positive_minutes(field, value, Minutes::from_hours(value), "h")
}

fn minutes(field: &'static str, value: f64) -> ProfileResult<Minutes> {
    positive_minutes(field, value, Minutes::from_hours(value / 60.0), "min")
}

/// A limit that rounds to zero minutes would emit zero-length events or let
/// the driving loop spin without progress.
fn positive_minutes(
    field:     &'static str,
    raw:       f64,
    converted: Option<Minutes>,
    unit:      &str,
) -> ProfileResult<Minutes> {
    match converted {
        Some(m) if raw.is_finite() && m.is_positive() => Ok(m),
        _ => Err(ProfileError::invalid(
            field,
            format!("must be at least one minute, got {raw} {unit}"),
        )),
    }
}
