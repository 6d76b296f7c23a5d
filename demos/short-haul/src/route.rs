//! Synthetic Chicago → Indianapolis → Nashville route.
//!
//! Coarse polyline along I-65; distances and duration are what a mapping
//! service would report for the full trip.

use hos_core::GeoPoint;
use hos_route::{RouteGeometry, Waypoint};

pub fn chicago_to_nashville() -> RouteGeometry {
    let chicago = GeoPoint::new(41.8781, -87.6298);
    let indianapolis = GeoPoint::new(39.7684, -86.1581);
    let nashville = GeoPoint::new(36.1627, -86.7816);

    RouteGeometry {
        distance_miles: 470.0,
        duration_hours: 7.2,
        polyline: vec![
            chicago,
            GeoPoint::new(41.5250, -87.3500), // Gary
            GeoPoint::new(40.4167, -86.8753), // Lafayette
            indianapolis,
            GeoPoint::new(39.2014, -85.9214), // Columbus
            GeoPoint::new(38.2527, -85.7585), // Louisville
            GeoPoint::new(36.9685, -86.4808), // Bowling Green
            nashville,
        ],
        origin:  Waypoint::new("Chicago, IL", chicago),
        pickup:  Waypoint::new("Indianapolis, IN", indianapolis),
        dropoff: Waypoint::new("Nashville, TN", nashville),
    }
}
