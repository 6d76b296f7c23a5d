//! `HosProfile` and its rule groups.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "name": "FMCSA property-carrying",
//!   "shift": {
//!     "minOffDutyBeforeShiftHours": 10,
//!     "maxDrivingHours": 11,
//!     "maxDutyWindowHours": 14
//!   },
//!   "break": { "requiredAfterDrivingHours": 8, "breakDurationMinutes": 30 }
//! }
//! ```
//!
//! `shift` and `break` are required, and so is every numeric field inside
//! them.  `statuses`, `fuel`, and `blocks` default to the FMCSA values when
//! omitted.  `sleeperBerth`, `cycle`, and `exceptions` are accepted and
//! carried for downstream consumers; the scheduler does not read them.

use serde::{Deserialize, Serialize};

use hos_core::DutyStatus;

// ── Status flags ──────────────────────────────────────────────────────────────

/// How time spent in one duty status counts against the shift limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFlags {
    pub counts_toward_driving:     bool,
    pub counts_toward_on_duty:     bool,
    pub counts_toward_duty_window: bool,
    pub qualifies_as_rest:         bool,
}

/// Flags for each of the four duty statuses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRules {
    pub off_duty:            StatusFlags,
    pub sleeper_berth:       StatusFlags,
    pub driving:             StatusFlags,
    pub on_duty_not_driving: StatusFlags,
}

impl StatusRules {
    pub fn flags(&self, status: DutyStatus) -> StatusFlags {
        match status {
            DutyStatus::OffDuty          => self.off_duty,
            DutyStatus::SleeperBerth     => self.sleeper_berth,
            DutyStatus::Driving          => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving,
        }
    }
}

impl Default for StatusRules {
    /// The 14-hour window is elapsed time, so short off-duty breaks count
    /// toward it; sleeper-berth time does not.
    fn default() -> Self {
        Self {
            off_duty: StatusFlags {
                counts_toward_driving:     false,
                counts_toward_on_duty:     false,
                counts_toward_duty_window: true,
                qualifies_as_rest:         true,
            },
            sleeper_berth: StatusFlags {
                counts_toward_driving:     false,
                counts_toward_on_duty:     false,
                counts_toward_duty_window: false,
                qualifies_as_rest:         true,
            },
            driving: StatusFlags {
                counts_toward_driving:     true,
                counts_toward_on_duty:     true,
                counts_toward_duty_window: true,
                qualifies_as_rest:         false,
            },
            on_duty_not_driving: StatusFlags {
                counts_toward_driving:     false,
                counts_toward_on_duty:     true,
                counts_toward_duty_window: true,
                qualifies_as_rest:         false,
            },
        }
    }
}

// ── Shift / break / fuel ──────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRules {
    /// Off-duty time required before a new shift may start.
    pub min_off_duty_before_shift_hours: f64,
    /// Driving allowed per shift.
    pub max_driving_hours:               f64,
    /// Elapsed on-duty window per shift.
    pub max_duty_window_hours:           f64,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            min_off_duty_before_shift_hours: 10.0,
            max_driving_hours:               11.0,
            max_duty_window_hours:           14.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRule {
    /// Cumulative driving after which a break is mandatory.
    pub required_after_driving_hours: f64,
    pub break_duration_minutes:       f64,
}

impl Default for BreakRule {
    fn default() -> Self {
        Self {
            required_after_driving_hours: 8.0,
            break_duration_minutes:       30.0,
        }
    }
}

/// Fueling assumption: one stop every `interval_miles` of driving.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRule {
    pub interval_miles: f64,
    pub stop_hours:     f64,
}

impl Default for FuelRule {
    fn default() -> Self {
        Self { interval_miles: 1000.0, stop_hours: 0.5 }
    }
}

/// Fixed-duration on-duty blocks bracketing the trip.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedBlocks {
    pub pre_trip_hours:  f64,
    pub pickup_hours:    f64,
    pub dropoff_hours:   f64,
    pub post_trip_hours: f64,
}

impl Default for FixedBlocks {
    fn default() -> Self {
        Self {
            pre_trip_hours:  0.25,
            pickup_hours:    1.0,
            dropoff_hours:   1.0,
            post_trip_hours: 0.25,
        }
    }
}

// ── Accepted but not scheduled ────────────────────────────────────────────────

/// Split sleeper-berth provision (e.g. 7/3 or 8/2).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleeperBerthRules {
    pub split_allowed:          bool,
    pub min_long_period_hours:  f64,
    pub min_short_period_hours: f64,
}

impl Default for SleeperBerthRules {
    fn default() -> Self {
        Self {
            split_allowed:          true,
            min_long_period_hours:  7.0,
            min_short_period_hours: 2.0,
        }
    }
}

/// Multi-day on-duty cycle (60/7 or 70/8) and its restart.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRules {
    pub max_on_duty_hours: f64,
    pub period_days:       u32,
    pub restart_hours:     f64,
}

impl Default for CycleRules {
    fn default() -> Self {
        Self {
            max_on_duty_hours: 70.0,
            period_days:       8,
            restart_hours:     34.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRules {
    pub adverse_conditions_extension_hours: f64,
    pub short_haul_radius_miles:            f64,
}

impl Default for ExceptionRules {
    fn default() -> Self {
        Self {
            adverse_conditions_extension_hours: 2.0,
            short_haul_radius_miles:            150.0,
        }
    }
}

// ── HosProfile ────────────────────────────────────────────────────────────────

/// A complete hours-of-service profile.
///
/// Treated as immutable for the duration of a scheduling run.  Call
/// [`HosProfile::limits`] to validate and convert to whole minutes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HosProfile {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub statuses: StatusRules,

    pub shift: ShiftRules,

    #[serde(rename = "break")]
    pub break_rule: BreakRule,

    #[serde(default)]
    pub fuel: FuelRule,

    #[serde(default)]
    pub blocks: FixedBlocks,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeper_berth: Option<SleeperBerthRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<ExceptionRules>,
}

fn default_name() -> String {
    "FMCSA property-carrying".to_owned()
}

impl Default for HosProfile {
    fn default() -> Self {
        Self {
            name:          default_name(),
            statuses:      StatusRules::default(),
            shift:         ShiftRules::default(),
            break_rule:    BreakRule::default(),
            fuel:          FuelRule::default(),
            blocks:        FixedBlocks::default(),
            sleeper_berth: Some(SleeperBerthRules::default()),
            cycle:         Some(CycleRules::default()),
            exceptions:    Some(ExceptionRules::default()),
        }
    }
}

impl HosProfile {
    /// Flags for `status`.
    #[inline]
    pub fn flags(&self, status: DutyStatus) -> StatusFlags {
        self.statuses.flags(status)
    }
}
