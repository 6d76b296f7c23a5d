//! The `DutyEvent` record: one contiguous span of a single duty status.

use chrono::NaiveDateTime;

use crate::time::hours_between;
use crate::{DutyStatus, EventKind, GeoPoint};

/// One span of the duty log.
///
/// Within a generated sequence `start < end` and each event starts exactly
/// where the previous one ended.
///
/// `lat`/`lng` is a display hint for map markers.  It is not odometer data
/// and must not be used to derive mileage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DutyEvent {
    pub status: DutyStatus,
    #[cfg_attr(feature = "serde", serde(rename = "eventKind"))]
    pub kind: EventKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    pub remarks: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lat: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lng: Option<f64>,
}

impl DutyEvent {
    /// A new event of `kind` with the kind's status and default remark, and
    /// no position.
    pub fn new(
        kind:     EventKind,
        start:    NaiveDateTime,
        end:      NaiveDateTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            status:   kind.status(),
            kind,
            start,
            end,
            location: location.into(),
            remarks:  kind.remark().to_owned(),
            lat:      None,
            lng:      None,
        }
    }

    /// Duration in decimal hours (millisecond resolution).
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }

    /// The display position, if one was assigned.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// Assign the display position.  `(0, 0)` is stored like any other point.
    pub fn set_position(&mut self, p: GeoPoint) {
        self.lat = Some(p.lat);
        self.lng = Some(p.lng);
    }

    pub fn clear_position(&mut self) {
        self.lat = None;
        self.lng = None;
    }

    /// The same event clipped to `[start, end)`; status, kind, location,
    /// remarks, and position are preserved.
    pub fn clipped(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end, ..self.clone() }
    }
}
