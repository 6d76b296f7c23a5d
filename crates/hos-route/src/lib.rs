//! `hos-route`: route geometry supplied by the upstream mapping service.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geometry`]    | `RouteGeometry`, `Waypoint`, `LegSplit`               |
//! | [`interpolate`] | `MeasuredPolyline`, `position_at_distance`            |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                        |
//!
//! A trip always has three waypoints (origin, pickup, dropoff) and therefore
//! exactly two legs.  The mapping service reports one total distance and
//! duration; [`RouteGeometry::legs`] apportions both between the legs by the
//! great-circle length of each leg.

pub mod error;
pub mod geometry;
pub mod interpolate;


pub use error::{RouteError, RouteResult};
pub use geometry::{LegSplit, RouteGeometry, Waypoint};
pub use interpolate::{MeasuredPolyline, position_at_distance};
