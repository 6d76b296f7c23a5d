//! Unit and scenario tests for hos-schedule.

use chrono::{NaiveDate, NaiveDateTime};

use hos_core::{DutyEvent, DutyStatus, EventKind, GeoPoint};
use hos_profile::HosProfile;
use hos_route::{RouteGeometry, Waypoint};

use crate::{ScheduleObserver, ShiftState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn end_of(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// A route along the -90° meridian.  Leg lengths are `leg1_deg` and
/// `leg2_deg` degrees of latitude, so the leg-1 share is exactly
/// `leg1_deg / (leg1_deg + leg2_deg)`.
fn route(leg1_deg: f64, leg2_deg: f64, miles: f64, hours: f64) -> RouteGeometry {
    let o = GeoPoint::new(40.0, -90.0);
    let p = GeoPoint::new(40.0 + leg1_deg, -90.0);
    let d = GeoPoint::new(40.0 + leg1_deg + leg2_deg, -90.0);
    RouteGeometry {
        distance_miles: miles,
        duration_hours: hours,
        polyline:       vec![o, p, d],
        origin:         Waypoint::new("Joliet, IL", o),
        pickup:         Waypoint::new("Peoria, IL", p),
        dropoff:        Waypoint::new("Madison, WI", d),
    }
}

/// The 100 mi / 2 h trip split 40/60.
fn short_trip() -> RouteGeometry {
    route(0.4, 0.6, 100.0, 2.0)
}

fn kinds(events: &[DutyEvent]) -> Vec<EventKind> {
    events.iter().map(|e| e.kind).collect()
}

fn assert_gapless_days(events: &[DutyEvent]) {
    let first = events.first().expect("non-empty schedule");
    let last = events.last().expect("non-empty schedule");
    assert_eq!(first.start, hos_core::time::start_of_day(first.start));
    assert_eq!(last.end, hos_core::time::end_of_day(last.end.date()).unwrap());
    for e in events {
        assert!(e.start < e.end, "empty event {e:?}");
    }
    for w in events.windows(2) {
        assert_eq!(w[0].end, w[1].start, "gap or overlap between {:?} and {:?}", w[0].kind, w[1].kind);
    }
}

/// Records every event together with the state right after it, and the
/// state seen by each `on_rest`.
#[derive(Default)]
struct Recorder {
    after_event: Vec<(EventKind, ShiftState)>,
    rests:       Vec<ShiftState>,
}

impl ScheduleObserver for Recorder {
    fn on_event(&mut self, event: &DutyEvent, state: &ShiftState) {
        self.after_event.push((event.kind, state.clone()));
    }

    fn on_rest(&mut self, state: &ShiftState) {
        self.rests.push(state.clone());
    }
}

// ── ShiftState transitions ────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use hos_core::{DutyStatus, Minutes};
    use hos_profile::HosProfile;

    use super::at;
    use crate::{Constraint, ShiftState};

    #[test]
    fn budget_bound_by_leg_when_short() {
        let limits = HosProfile::default().limits().unwrap();
        let s = ShiftState::new(at(1, 8, 0));
        let b = s.drive_budget(&limits, Minutes(48));
        assert_eq!(b.chunk, Minutes(48));
        assert_eq!(b.binding, Constraint::LegRemaining);
    }

    #[test]
    fn budget_bound_by_break_threshold() {
        let limits = HosProfile::default().limits().unwrap();
        let mut s = ShiftState::new(at(1, 8, 0));
        s.record(&limits, DutyStatus::Driving, Minutes(300));
        let b = s.drive_budget(&limits, Minutes(600));
        assert_eq!(b.chunk, Minutes(180));
        assert_eq!(b.binding, Constraint::BreakDue);
    }

    #[test]
    fn exhausted_window_clamps_to_zero() {
        let limits = HosProfile::default().limits().unwrap();
        let mut s = ShiftState::new(at(1, 8, 0));
        s.record(&limits, DutyStatus::OnDutyNotDriving, Minutes(15 * 60));
        let b = s.drive_budget(&limits, Minutes(60));
        assert_eq!(b.chunk, Minutes::ZERO);
        assert_eq!(b.binding, Constraint::DutyWindow);
        assert!(s.rest_due(&limits));
        assert!(!s.break_due(&limits));
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        let limits = HosProfile::default().limits().unwrap();
        let mut s = ShiftState::new(at(1, 8, 0));
        s.record(&limits, DutyStatus::Driving, Minutes(480));
        // Leg remaining and break threshold both at zero.
        let b = s.drive_budget(&limits, Minutes::ZERO);
        assert_eq!(b.binding, Constraint::LegRemaining);
    }

    #[test]
    fn record_follows_status_flags() {
        let limits = HosProfile::default().limits().unwrap();
        let mut s = ShiftState::new(at(1, 8, 0));
        s.record(&limits, DutyStatus::Driving, Minutes(60));
        s.record(&limits, DutyStatus::OnDutyNotDriving, Minutes(30));
        s.record(&limits, DutyStatus::OffDuty, Minutes(30));
        s.record(&limits, DutyStatus::SleeperBerth, Minutes(120));
        assert_eq!(s.shift_driving, Minutes(60));
        assert_eq!(s.driving_since_break, Minutes(60));
        assert_eq!(s.shift_on_duty, Minutes(90));
        assert_eq!(s.shift_duty_window, Minutes(120));
    }

    #[test]
    fn break_rest_and_refuel_reset_their_counters() {
        let limits = HosProfile::default().limits().unwrap();
        let mut s = ShiftState::new(at(1, 8, 0));
        s.record(&limits, DutyStatus::Driving, Minutes(500));
        s.record_miles(1200.0);
        assert!(s.fuel_due(&limits));

        s.take_break();
        assert_eq!(s.driving_since_break, Minutes::ZERO);
        assert_eq!(s.shift_driving, Minutes(500));

        s.refuel();
        assert_eq!(s.miles_since_fuel, 0.0);
        assert_eq!(s.distance_miles, 1200.0);

        s.rest();
        assert!(s.is_fresh_shift());
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;
    use crate::{NoopObserver, Scheduler, generate_duty_events};

    #[test]
    fn short_single_day_trip() {
        let events = generate_duty_events(
            &short_trip(),
            at(1, 8, 0),
            &HosProfile::default(),
            50.0,
        )
        .unwrap();

        let expected = [
            (DutyStatus::OffDuty,          EventKind::Pad,         at(1, 0, 0),   at(1, 8, 0)),
            (DutyStatus::OnDutyNotDriving, EventKind::PreTrip,     at(1, 8, 0),   at(1, 8, 15)),
            (DutyStatus::Driving,          EventKind::DrivingLeg1, at(1, 8, 15),  at(1, 9, 3)),
            (DutyStatus::OnDutyNotDriving, EventKind::Pickup,      at(1, 9, 3),   at(1, 10, 3)),
            (DutyStatus::Driving,          EventKind::DrivingLeg2, at(1, 10, 3),  at(1, 11, 15)),
            (DutyStatus::OnDutyNotDriving, EventKind::Dropoff,     at(1, 11, 15), at(1, 12, 15)),
            (DutyStatus::OnDutyNotDriving, EventKind::PostTrip,    at(1, 12, 15), at(1, 12, 30)),
            (DutyStatus::OffDuty,          EventKind::Pad,         at(1, 12, 30), end_of(1)),
        ];
        assert_eq!(events.len(), expected.len());
        for (e, (status, kind, start, end)) in events.iter().zip(expected) {
            assert_eq!((e.status, e.kind, e.start, e.end), (status, kind, start, end));
        }
        assert_eq!(events[0].remarks, "Continuous Rest Period");
        assert_eq!(events[3].location, "Peoria, IL");
        assert_gapless_days(&events);
    }

    #[test]
    fn forced_rest_inserted_once_and_resets_shift() {
        // 650 mi / 13 h: leg 1 = 312 min, leg 2 = 468 min.
        let route = route(0.4, 0.6, 650.0, 13.0);
        let mut rec = Recorder::default();
        let events = Scheduler::new(&route, at(1, 6, 0), &HosProfile::default(), 50.0)
            .unwrap()
            .run(&mut rec)
            .unwrap();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::Pad,
                EventKind::PreTrip,
                EventKind::DrivingLeg1,
                EventKind::Pickup,
                EventKind::DrivingLeg2,
                EventKind::Break,
                EventKind::DrivingLeg2,
                EventKind::SleeperRest,
                EventKind::DrivingLeg2,
                EventKind::Dropoff,
                EventKind::PostTrip,
                EventKind::Pad,
            ]
        );

        let rests: Vec<_> = events.iter().filter(|e| e.status == DutyStatus::SleeperBerth).collect();
        assert_eq!(rests.len(), 1);
        assert_eq!(rests[0].start, at(1, 18, 45));
        assert_eq!(rests[0].end, at(2, 4, 45));

        assert_eq!(rec.rests.len(), 1);
        assert!(rec.rests[0].is_fresh_shift());

        // Driving resumes right after the rest, from a fresh shift.
        let idx = events.iter().position(|e| e.kind == EventKind::SleeperRest).unwrap();
        assert!(events[idx + 1].kind.is_driving());
        let (_, after_resume) = &rec.after_event[idx + 1];
        assert_eq!(after_resume.shift_driving.0, 120);

        // Every driving minute of the route is logged.
        let driven: f64 = events.iter().filter(|e| e.kind.is_driving()).map(|e| e.duration_hours()).sum();
        assert!((driven - 13.0).abs() < 1e-9);
        assert_eq!(events.last().unwrap().end, end_of(2));
        assert_gapless_days(&events);
    }

    #[test]
    fn break_after_eight_hours_on_leg_one() {
        // Leg 1 = 540 min, leg 2 = 60 min.
        let route = route(0.9, 0.1, 500.0, 10.0);
        let events = generate_duty_events(&route, at(1, 5, 0), &HosProfile::default(), 50.0).unwrap();
        assert_eq!(
            kinds(&events)[1..6],
            [
                EventKind::PreTrip,
                EventKind::DrivingLeg1,
                EventKind::Break,
                EventKind::DrivingLeg1,
                EventKind::Pickup,
            ]
        );
        assert_eq!(events[2].end, at(1, 13, 15)); // 8 h of driving
        assert_eq!(events[3].status, DutyStatus::OffDuty);
        assert_eq!(events[3].end, at(1, 13, 45));
        assert!(!events.iter().any(|e| e.kind == EventKind::SleeperRest));
        assert_gapless_days(&events);
    }

    #[test]
    fn fuel_stop_before_leg_two_driving() {
        let mut profile = HosProfile::default();
        profile.fuel.interval_miles = 100.0;
        // Leg 1 = 120 min = 100 mi at 50 mph.
        let route = route(0.4, 0.6, 250.0, 5.0);
        let events = generate_duty_events(&route, at(1, 7, 0), &profile, 50.0).unwrap();
        let fuel: Vec<_> = events.iter().filter(|e| e.kind == EventKind::FuelStop).collect();
        assert_eq!(fuel.len(), 1);
        assert_eq!(fuel[0].status, DutyStatus::OnDutyNotDriving);
        assert_eq!(fuel[0].remarks, "Fueling Stop");
        let idx = events.iter().position(|e| e.kind == EventKind::FuelStop).unwrap();
        assert_eq!(events[idx - 1].kind, EventKind::Pickup);
        assert_eq!(events[idx + 1].kind, EventKind::DrivingLeg2);
        assert_gapless_days(&events);
    }

    #[test]
    fn multi_day_trip_with_fuel_breaks_and_rests() {
        // 2 400 mi / 48 h: several shifts, a few fuel stops.
        let route = route(0.1, 0.9, 2_400.0, 48.0);
        let events = generate_duty_events(&route, at(1, 9, 30), &HosProfile::default(), 50.0).unwrap();
        assert_gapless_days(&events);

        let rests = events.iter().filter(|e| e.kind == EventKind::SleeperRest).count();
        assert!(rests >= 4, "got {rests} rests");
        let fuel = events.iter().filter(|e| e.kind == EventKind::FuelStop).count();
        assert_eq!(fuel, 2);

        let driven: f64 = events.iter().filter(|e| e.kind.is_driving()).map(|e| e.duration_hours()).sum();
        assert!((driven - 48.0).abs() < 1e-9);

        // No driving chunk exceeds the break threshold.
        assert!(events.iter().filter(|e| e.kind.is_driving()).all(|e| e.duration_hours() <= 8.0));
    }

    #[test]
    fn midnight_start_has_no_leading_pad() {
        let events = generate_duty_events(&short_trip(), at(1, 0, 0), &HosProfile::default(), 50.0).unwrap();
        assert_eq!(events[0].kind, EventKind::PreTrip);
        assert_eq!(events[0].start, at(1, 0, 0));
        assert_gapless_days(&events);
    }

    #[test]
    fn late_start_runs_into_next_day() {
        let events = generate_duty_events(&short_trip(), at(1, 22, 0), &HosProfile::default(), 50.0).unwrap();
        assert_eq!(events.last().unwrap().end, end_of(2));
        assert_eq!(events.last().unwrap().start, at(2, 2, 30));
        assert_gapless_days(&events);
    }

    #[test]
    fn seconds_in_start_time_are_truncated() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 42).unwrap();
        let events = generate_duty_events(&short_trip(), start, &HosProfile::default(), 50.0).unwrap();
        assert_eq!(events[0].end, at(1, 8, 0));
    }

    #[test]
    fn zero_duration_route_still_logs_fixed_blocks() {
        let route = route(0.4, 0.6, 0.0, 0.0);
        let events = generate_duty_events(&route, at(1, 8, 0), &HosProfile::default(), 50.0).unwrap();
        assert!(!events.iter().any(|e| e.kind.is_driving()));
        assert_eq!(events.len(), 6);
        assert_gapless_days(&events);
    }

    #[test]
    fn deterministic() {
        let route = route(0.3, 0.7, 1_500.0, 30.0);
        let a = generate_duty_events(&route, at(1, 4, 0), &HosProfile::default(), 50.0).unwrap();
        let b = generate_duty_events(&route, at(1, 4, 0), &HosProfile::default(), 50.0).unwrap();
        assert_eq!(a, b);
        let mut noop = NoopObserver;
        let c = Scheduler::new(&route, at(1, 4, 0), &HosProfile::default(), 50.0)
            .unwrap()
            .run(&mut noop)
            .unwrap();
        assert_eq!(kinds(&a), kinds(&c));
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use hos_core::Minutes;

    use super::*;
    use crate::{Constraint, NoopObserver, ScheduleError, Scheduler, generate_duty_events};

    #[test]
    fn zero_speed_rejected_before_scheduling() {
        let mut rec = Recorder::default();
        let err = Scheduler::new(&short_trip(), at(1, 8, 0), &HosProfile::default(), 0.0)
            .map(|s| s.run(&mut rec))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSpeed(s) if s == 0.0));
        assert!(err.is_invalid_input());
        assert!(rec.after_event.is_empty());
    }

    #[test]
    fn negative_and_nan_speed_rejected() {
        for speed in [-50.0, f64::NAN, f64::INFINITY] {
            let err = generate_duty_events(&short_trip(), at(1, 8, 0), &HosProfile::default(), speed)
                .unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidSpeed(_)));
        }
    }

    #[test]
    fn negative_duration_rejected() {
        let err = generate_duty_events(
            &route(0.4, 0.6, 100.0, -2.0),
            at(1, 8, 0),
            &HosProfile::default(),
            50.0,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::Route(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn invalid_profile_rejected() {
        let mut profile = HosProfile::default();
        profile.break_rule.required_after_driving_hours = 0.0;
        let err = generate_duty_events(&short_trip(), at(1, 8, 0), &profile, 50.0).unwrap_err();
        assert!(matches!(err, ScheduleError::Profile(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn leg_one_exhausting_the_shift_is_unresolved() {
        let mut profile = HosProfile::default();
        profile.shift.max_driving_hours = 1.0;
        // Leg 1 = 120 min against a 60-minute driving cap.
        let err = generate_duty_events(&route(0.4, 0.6, 250.0, 5.0), at(1, 8, 0), &profile, 50.0)
            .unwrap_err();
        match err {
            ScheduleError::LegUnresolved { leg, remaining, binding } => {
                assert_eq!(leg, 1);
                assert_eq!(remaining, Minutes(60));
                assert_eq!(binding, Constraint::DrivingCap);
            }
            other => panic!("expected LegUnresolved, got {other:?}"),
        }
    }

    #[test]
    fn leg_one_outlasting_the_duty_window_is_unresolved() {
        let mut profile = HosProfile::default();
        profile.shift.max_duty_window_hours = 2.0;
        profile.blocks.pre_trip_hours = 1.5;
        // 90 min of pre-trip leaves 30 min of window for a 120-minute leg 1.
        let err = generate_duty_events(&route(0.4, 0.6, 250.0, 5.0), at(1, 8, 0), &profile, 50.0)
            .unwrap_err();
        assert!(!err.is_invalid_input());
        match err {
            ScheduleError::LegUnresolved { leg, remaining, binding } => {
                assert_eq!(leg, 1);
                assert_eq!(remaining, Minutes(90));
                assert_eq!(binding, Constraint::DutyWindow);
            }
            other => panic!("expected LegUnresolved, got {other:?}"),
        }
    }

    #[test]
    fn step_budget_reports_stall() {
        // Leg 1 needs three iterations: drive, break, drive.
        let route = route(0.9, 0.1, 500.0, 10.0);
        let err = Scheduler::new(&route, at(1, 5, 0), &HosProfile::default(), 50.0)
            .unwrap()
            .with_step_budget(2)
            .run(&mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Stalled { leg: 1, steps: 2 }));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn malformed_start_time_rejected() {
        let req = crate::TripRequest {
            route:             short_trip(),
            start_time:        "yesterday-ish".to_owned(),
            profile:           HosProfile::default(),
            average_speed_mph: 50.0,
        };
        let err = req.schedule().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidStartTime(_)));
        assert!(err.is_invalid_input());
    }
}

// ── Markers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod markers {
    use super::*;
    use crate::markers::display_offset_miles;
    use crate::{NoopObserver, Scheduler, place_markers};

    fn close(a: GeoPoint, b: GeoPoint) -> bool {
        (a.lat - b.lat).abs() < 1e-6 && (a.lng - b.lng).abs() < 1e-6
    }

    #[test]
    fn empty_polyline_leaves_positions_unset() {
        let mut route = short_trip();
        route.polyline.clear();
        let events = generate(&route);
        assert!(events.iter().all(|e| e.lat.is_none() && e.lng.is_none()));
    }

    #[test]
    fn vertex_at_null_island_is_kept() {
        let o = GeoPoint::new(0.0, 0.0);
        let p = GeoPoint::new(0.4, 0.0);
        let d = GeoPoint::new(1.0, 0.0);
        let route = RouteGeometry {
            distance_miles: 100.0,
            duration_hours: 2.0,
            polyline:       vec![o, p, d],
            origin:         Waypoint::new("Gulf of Guinea", o),
            pickup:         Waypoint::new("Buoy 4", p),
            dropoff:        Waypoint::new("Buoy 10", d),
        };
        let events = generate(&route);
        assert_eq!(events[0].position(), Some(o));
        assert_eq!(events[1].position(), Some(o));
        assert!(events.iter().all(|e| e.position().is_some()));
    }

    #[test]
    fn stops_sit_on_the_true_odometer_without_offsets() {
        let route = short_trip();
        let events = generate(&route);
        let origin = route.origin.location;
        // Pad and pre-trip at the origin.
        assert!(close(events[0].position().unwrap(), origin));
        assert!(close(events[1].position().unwrap(), origin));
        // Pickup after 40 mi; the polyline is ~69 mi long so this lands short
        // of the pickup vertex, proportionally.
        let line = route.measured_polyline();
        assert!(close(events[3].position().unwrap(), line.position_at(40.0)));
        // Leg-1 marker at its midpoint.
        assert!(close(events[2].position().unwrap(), line.position_at(20.0)));
    }

    #[test]
    fn offsets_push_later_markers_forward() {
        // 10° of latitude ≈ 691 mi of polyline, long enough that no marker
        // is clamped to the last vertex.
        let route = route(4.0, 6.0, 650.0, 13.0);
        let events = generate(&route);
        let line = route.measured_polyline();
        let brk = events.iter().position(|e| e.kind == EventKind::Break).unwrap();
        // The break sits at the true odometer; the next drive starts 3 mi on.
        let driven: f64 = events[..brk]
            .iter()
            .filter(|e| e.kind.is_driving())
            .map(|e| e.duration_hours() * 50.0)
            .sum();
        assert!(close(events[brk].position().unwrap(), line.position_at(driven)));
        let next = &events[brk + 1];
        let half = next.duration_hours() * 50.0 * 0.5;
        assert!(close(next.position().unwrap(), line.position_at(driven + 3.0 + half)));
    }

    #[test]
    fn offset_table() {
        assert_eq!(display_offset_miles(EventKind::FuelStop), 5.0);
        assert_eq!(display_offset_miles(EventKind::Break), 3.0);
        assert_eq!(display_offset_miles(EventKind::SleeperRest), 10.0);
        assert_eq!(display_offset_miles(EventKind::Pickup), 0.0);
    }

    fn generate(route: &RouteGeometry) -> Vec<DutyEvent> {
        let mut events = Scheduler::new(route, at(1, 8, 0), &HosProfile::default(), 50.0)
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        place_markers(&mut events, route, 50.0);
        events
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use super::*;
    use crate::{ScheduleError, TripRequest, schedule_batch};

    fn request(start: &str, speed: f64) -> TripRequest {
        TripRequest {
            route:             short_trip(),
            start_time:        start.to_owned(),
            profile:           HosProfile::default(),
            average_speed_mph: speed,
        }
    }

    #[test]
    fn results_in_input_order_with_per_trip_errors() {
        let reqs = vec![
            request("2024-03-01T08:00", 50.0),
            request("2024-03-01T08:00", 0.0),
            request("2024-03-02T06:30:00", 50.0),
        ];
        let out = schedule_batch(&reqs);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_ref().unwrap()[1].start, at(1, 8, 0));
        assert!(matches!(out[1], Err(ScheduleError::InvalidSpeed(_))));
        assert_eq!(out[2].as_ref().unwrap()[1].start, at(2, 6, 30));
    }
}
