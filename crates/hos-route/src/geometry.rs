//! Route geometry and leg apportioning.

use hos_core::{GeoPoint, Minutes};

use crate::{MeasuredPolyline, RouteError, RouteResult};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A named stop on the trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub address:  String,
    pub location: GeoPoint,
}

impl Waypoint {
    pub fn new(address: impl Into<String>, location: GeoPoint) -> Self {
        Self { address: address.into(), location }
    }
}

// ── RouteGeometry ─────────────────────────────────────────────────────────────

/// A routed origin → pickup → dropoff trip as reported by the mapping
/// service.
///
/// `polyline` may be empty or degenerate (repeated vertices); consumers must
/// tolerate both.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteGeometry {
    pub distance_miles: f64,
    pub duration_hours: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub polyline:       Vec<GeoPoint>,
    pub origin:         Waypoint,
    pub pickup:         Waypoint,
    pub dropoff:        Waypoint,
}

/// How a route's distance and driving time divide between its two legs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegSplit {
    /// Share of the route attributed to leg 1, in `[0, 1]`.
    pub leg1_fraction: f64,
    pub leg1_miles:    f64,
    pub leg2_miles:    f64,
    pub leg1_minutes:  Minutes,
    pub leg2_minutes:  Minutes,
}

impl LegSplit {
    /// Combined driving time of both legs.
    pub fn total_minutes(&self) -> Minutes {
        self.leg1_minutes + self.leg2_minutes
    }
}

impl RouteGeometry {
    /// Reject negative, non-finite, or unrepresentable values.
    pub fn validate(&self) -> RouteResult<()> {
        check_non_negative("distance", self.distance_miles)?;
        check_non_negative("duration", self.duration_hours)?;
        if Minutes::from_hours(self.duration_hours).is_none() {
            return Err(RouteError::DurationOutOfRange(self.duration_hours));
        }

        for (name, wp) in [
            ("origin", &self.origin),
            ("pickup", &self.pickup),
            ("dropoff", &self.dropoff),
        ] {
            if !wp.location.is_finite() {
                return Err(RouteError::InvalidCoordinate { what: format!("{name} waypoint") });
            }
        }
        if let Some(i) = self.polyline.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::InvalidCoordinate { what: format!("polyline vertex {i}") });
        }
        Ok(())
    }

    /// Apportion distance and driving time between the two legs in
    /// proportion to their great-circle lengths.
    ///
    /// Leg 1 time is rounded to the minute and leg 2 takes the remainder, so
    /// the legs always sum to the route's total duration.  When all three
    /// waypoints coincide the route is split evenly.
    pub fn legs(&self) -> RouteResult<LegSplit> {
        self.validate()?;

        let d1 = self.origin.location.distance_miles(self.pickup.location);
        let d2 = self.pickup.location.distance_miles(self.dropoff.location);
        let leg1_fraction = if d1 + d2 > 0.0 { d1 / (d1 + d2) } else { 0.5 };

        let total = Minutes::from_hours(self.duration_hours)
            .ok_or(RouteError::DurationOutOfRange(self.duration_hours))?;
        let leg1_minutes = Minutes((total.0 as f64 * leg1_fraction).round() as i64);

        Ok(LegSplit {
            leg1_fraction,
            leg1_miles:   self.distance_miles * leg1_fraction,
            leg2_miles:   self.distance_miles * (1.0 - leg1_fraction),
            leg1_minutes,
            leg2_minutes: total - leg1_minutes,
        })
    }

    /// The polyline with cumulative distances, for repeated position lookups.
    pub fn measured_polyline(&self) -> MeasuredPolyline {
        MeasuredPolyline::new(&self.polyline)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> RouteResult<()> {
    if !value.is_finite() {
        return Err(RouteError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(RouteError::Negative { field, value });
    }
    Ok(())
}
