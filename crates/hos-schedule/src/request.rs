//! The public call contract: one trip in, one duty-event sequence out.

use chrono::NaiveDateTime;

use hos_core::DutyEvent;
use hos_core::time::parse_timestamp;
use hos_profile::HosProfile;
use hos_route::RouteGeometry;

use crate::{NoopObserver, ScheduleError, ScheduleResult, Scheduler, place_markers};

/// Schedule a trip and place display markers on the result.
///
/// Fails with an invalid-input error before producing anything if the
/// route, profile, or speed is unusable.
pub fn generate_duty_events(
    route:             &RouteGeometry,
    start:             NaiveDateTime,
    profile:           &HosProfile,
    average_speed_mph: f64,
) -> ScheduleResult<Vec<DutyEvent>> {
    let mut events = Scheduler::new(route, start, profile, average_speed_mph)?
        .run(&mut NoopObserver)?;
    place_markers(&mut events, route, average_speed_mph);
    Ok(events)
}

/// A self-contained scheduling request as received from a caller.
///
/// `start_time` stays a string until [`TripRequest::schedule`] so that a
/// malformed timestamp is reported as an invalid-input error.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripRequest {
    pub route:             RouteGeometry,
    pub start_time:        String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile:           HosProfile,
    pub average_speed_mph: f64,
}

impl TripRequest {
    pub fn schedule(&self) -> ScheduleResult<Vec<DutyEvent>> {
        let start = parse_timestamp(&self.start_time).map_err(ScheduleError::InvalidStartTime)?;
        generate_duty_events(&self.route, start, &self.profile, self.average_speed_mph)
    }
}
