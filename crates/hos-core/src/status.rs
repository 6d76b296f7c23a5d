//! Duty statuses and the event classification carried alongside them.
//!
//! `DutyStatus` is the regulatory row of the log grid.  `EventKind` says
//! *why* an event exists (a pickup, a fuel stop, a mandatory break …), so
//! downstream consumers style markers and filter remarks by matching an enum
//! instead of searching free text.

/// One of the four rows of an ELD duty grid.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// All statuses in grid order (top row first).
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "off_duty",
            DutyStatus::SleeperBerth     => "sleeper_berth",
            DutyStatus::Driving          => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EventKind ─────────────────────────────────────────────────────────────────

/// What produced a duty event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    /// Off-duty filler from midnight to trip start, or from trip end to the
    /// end of the last day.
    Pad,
    PreTrip,
    DrivingLeg1,
    Pickup,
    DrivingLeg2,
    Dropoff,
    PostTrip,
    /// Mandatory short break after cumulative driving.
    Break,
    FuelStop,
    /// Full off-duty period that starts a new shift.
    SleeperRest,
}

impl EventKind {
    /// The duty status this kind is logged under.
    pub fn status(self) -> DutyStatus {
        match self {
            EventKind::Pad | EventKind::Break => DutyStatus::OffDuty,
            EventKind::SleeperRest => DutyStatus::SleeperBerth,
            EventKind::DrivingLeg1 | EventKind::DrivingLeg2 => DutyStatus::Driving,
            EventKind::PreTrip
            | EventKind::Pickup
            | EventKind::Dropoff
            | EventKind::PostTrip
            | EventKind::FuelStop => DutyStatus::OnDutyNotDriving,
        }
    }

    /// Default remark text written to the log for this kind.
    pub fn remark(self) -> &'static str {
        match self {
            EventKind::Pad         => "Continuous Rest Period",
            EventKind::PreTrip     => "Pre-trip Inspection",
            EventKind::DrivingLeg1 => "Driving to Pickup",
            EventKind::Pickup      => "Pickup",
            EventKind::DrivingLeg2 => "Driving to Dropoff",
            EventKind::Dropoff     => "Dropoff",
            EventKind::PostTrip    => "Post-trip Inspection",
            EventKind::Break       => "Mandatory Break",
            EventKind::FuelStop    => "Fueling Stop",
            EventKind::SleeperRest => "Sleeper Berth Rest",
        }
    }

    #[inline]
    pub fn is_driving(self) -> bool {
        matches!(self, EventKind::DrivingLeg1 | EventKind::DrivingLeg2)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.remark())
    }
}
