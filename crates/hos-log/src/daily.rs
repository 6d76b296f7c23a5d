//! Per-day log records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use hos_core::{DutyEvent, DutyStatus};

/// Hours per duty status for one day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusTotals {
    pub off_duty:            f64,
    pub sleeper_berth:       f64,
    pub driving:             f64,
    pub on_duty_not_driving: f64,
}

impl StatusTotals {
    pub fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty          => self.off_duty,
            DutyStatus::SleeperBerth     => self.sleeper_berth,
            DutyStatus::Driving          => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving,
        }
    }

    pub fn add(&mut self, status: DutyStatus, hours: f64) {
        let slot = match status {
            DutyStatus::OffDuty          => &mut self.off_duty,
            DutyStatus::SleeperBerth     => &mut self.sleeper_berth,
            DutyStatus::Driving          => &mut self.driving,
            DutyStatus::OnDutyNotDriving => &mut self.on_duty_not_driving,
        };
        *slot += hours;
    }

    /// Sum over all four statuses.  24.0 (to within a millisecond) for a
    /// fully covered day.
    pub fn sum(&self) -> f64 {
        DutyStatus::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// Hours on duty (driving plus on duty not driving).
    pub fn on_duty(&self) -> f64 {
        self.driving + self.on_duty_not_driving
    }
}

/// One calendar day of the duty log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date:        NaiveDate,
    /// Events, or pieces of events cut at midnight, in time order.
    pub events:      Vec<DutyEvent>,
    pub totals:      StatusTotals,
    /// Driving hours × average speed.
    pub total_miles: f64,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events:      Vec::new(),
            totals:      StatusTotals::default(),
            total_miles: 0.0,
        }
    }

    /// Append a piece that lies within this day.
    pub(crate) fn push(&mut self, piece: DutyEvent, average_speed_mph: f64) {
        let hours = piece.duration_hours();
        self.totals.add(piece.status, hours);
        if piece.status == DutyStatus::Driving {
            self.total_miles += hours * average_speed_mph;
        }
        self.events.push(piece);
    }
}
