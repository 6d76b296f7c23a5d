//! Display positions for map markers.
//!
//! The scheduler tracks true driving distance only.  Map rendering wants
//! stops that occur at the same odometer reading (a break right after a
//! fuel stop, say) to be visibly apart, so this pass spreads non-driving
//! markers forward along the route by a fixed offset per kind.
//!
//! The resulting `lat`/`lng` are a display convenience.  They are not
//! odometer data; mileage comes from driving durations only.

use hos_core::{DutyEvent, EventKind};
use hos_route::RouteGeometry;

/// Cosmetic forward offset, in miles, applied after a marker of `kind`.
pub fn display_offset_miles(kind: EventKind) -> f64 {
    match kind {
        EventKind::FuelStop    => 5.0,
        EventKind::Break       => 3.0,
        EventKind::SleeperRest => 10.0,
        _ => 0.0,
    }
}

/// Assign a display position to every event.
///
/// Driving events are placed at the midpoint of their chunk; other events at
/// the display distance reached before their own offset is applied.  An
/// empty polyline leaves every position unset.
pub fn place_markers(events: &mut [DutyEvent], route: &RouteGeometry, average_speed_mph: f64) {
    let line = route.measured_polyline();
    if line.is_empty() {
        events.iter_mut().for_each(DutyEvent::clear_position);
        return;
    }

    let mut driven = 0.0;
    let mut offset = 0.0;

    for event in events.iter_mut() {
        if event.kind.is_driving() {
            let miles = event.duration_hours() * average_speed_mph;
            event.set_position(line.position_at(driven + offset + miles * 0.5));
            driven += miles;
        } else {
            event.set_position(line.position_at(driven + offset));
            offset += display_offset_miles(event.kind);
        }
    }
}
