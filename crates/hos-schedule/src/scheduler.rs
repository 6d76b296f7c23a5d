//! The `Scheduler` and its run loop.

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use hos_core::time::{advance, end_of_day, start_of_day, truncate_to_minute};
use hos_core::{DutyEvent, EventKind, Minutes};
use hos_profile::{HosProfile, ShiftLimits};
use hos_route::{LegSplit, RouteGeometry};

use crate::{ScheduleError, ScheduleObserver, ScheduleResult, ShiftState};

/// Default cap on loop iterations per driving leg.
///
/// A valid profile makes progress on every iteration (drive, break, fuel, or
/// rest), and a leg needs a handful of iterations per shift, so this is only
/// reached by inputs the loop cannot resolve.
pub const DEFAULT_STEP_BUDGET: usize = 100_000;

/// Which driving leg a loop is working on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Leg {
    ToPickup,
    ToDropoff,
}

impl Leg {
    fn number(self) -> u8 {
        match self {
            Leg::ToPickup  => 1,
            Leg::ToDropoff => 2,
        }
    }

    fn kind(self) -> EventKind {
        match self {
            Leg::ToPickup  => EventKind::DrivingLeg1,
            Leg::ToDropoff => EventKind::DrivingLeg2,
        }
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Validated inputs for one trip.
///
/// Construction performs every input check, so a `Scheduler` that exists can
/// only fail in [`run`](Self::run) with a scheduling-invariant error.
#[derive(Clone, Debug)]
pub struct Scheduler<'r> {
    route:             &'r RouteGeometry,
    legs:              LegSplit,
    limits:            ShiftLimits,
    start:             NaiveDateTime,
    average_speed_mph: f64,
    step_budget:       usize,
}

impl<'r> Scheduler<'r> {
    /// Validate inputs.  `start` is truncated to the minute.
    pub fn new(
        route:             &'r RouteGeometry,
        start:             NaiveDateTime,
        profile:           &HosProfile,
        average_speed_mph: f64,
    ) -> ScheduleResult<Self> {
        if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
            return Err(ScheduleError::InvalidSpeed(average_speed_mph));
        }
        let legs = route.legs()?;
        let limits = profile.limits()?;

        Ok(Self {
            route,
            legs,
            limits,
            start: truncate_to_minute(start),
            average_speed_mph,
            step_budget: DEFAULT_STEP_BUDGET,
        })
    }

    /// Override the per-leg iteration cap.
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = steps;
        self
    }

    pub fn legs(&self) -> &LegSplit {
        &self.legs
    }

    pub fn limits(&self) -> &ShiftLimits {
        &self.limits
    }

    /// Produce the full duty-event sequence.  Events carry no position; see
    /// [`place_markers`][crate::place_markers].
    pub fn run<O: ScheduleObserver>(&self, observer: &mut O) -> ScheduleResult<Vec<DutyEvent>> {
        let mut tl = Timeline {
            limits:   &self.limits,
            state:    ShiftState::new(self.start),
            events:   Vec::new(),
            observer,
        };
        let origin = self.route.origin.address.as_str();
        let pickup = self.route.pickup.address.as_str();
        let dropoff = self.route.dropoff.address.as_str();

        // ① Leading pad.
        let midnight = start_of_day(self.start);
        if self.start > midnight {
            tl.pad(midnight, self.start, origin);
        }

        // ② – ⑦
        tl.block(EventKind::PreTrip, self.limits.pre_trip, origin)?;
        self.drive_leg(&mut tl, Leg::ToPickup, self.legs.leg1_minutes, pickup)?;
        tl.block(EventKind::Pickup, self.limits.pickup, pickup)?;
        self.drive_leg(&mut tl, Leg::ToDropoff, self.legs.leg2_minutes, dropoff)?;
        tl.block(EventKind::Dropoff, self.limits.dropoff, dropoff)?;
        tl.block(EventKind::PostTrip, self.limits.post_trip, dropoff)?;

        // ⑧ Trailing pad.  `now` is minute-aligned, so it is always before
        // 23:59:59.999 of its own day.
        let now = tl.state.now;
        tl.pad(now, end_of_day(now.date())?, dropoff);

        debug!(
            events = tl.events.len(),
            start  = %self.start,
            end    = %now,
            miles  = tl.state.distance_miles,
            "duty schedule generated"
        );
        Ok(tl.events)
    }

    /// Drive `total` minutes of `leg`, inserting breaks, and on leg 2 fuel
    /// stops and full rests, as the limits require.
    fn drive_leg<O: ScheduleObserver>(
        &self,
        tl:          &mut Timeline<'_, O>,
        leg:         Leg,
        total:       Minutes,
        destination: &str,
    ) -> ScheduleResult<()> {
        let limits = &self.limits;
        let en_route = format!("En route to {destination}");
        let mut remaining = total;
        let mut steps = 0usize;

        while remaining.is_positive() {
            steps += 1;
            if steps > self.step_budget {
                return Err(ScheduleError::Stalled { leg: leg.number(), steps: self.step_budget });
            }

            if leg == Leg::ToDropoff {
                if tl.state.fuel_due(limits) {
                    debug!(at = %tl.state.now, miles = tl.state.miles_since_fuel, "fuel stop");
                    tl.block(EventKind::FuelStop, limits.fuel_stop, &en_route)?;
                    tl.state.refuel();
                }
                if tl.state.rest_due(limits) {
                    debug!(
                        at       = %tl.state.now,
                        driving  = %tl.state.shift_driving,
                        window   = %tl.state.shift_duty_window,
                        "shift limits reached, inserting full rest"
                    );
                    tl.block(EventKind::SleeperRest, limits.min_off_duty, &en_route)?;
                    tl.state.rest();
                    tl.observer.on_rest(&tl.state);
                }
            }

            let budget = tl.state.drive_budget(limits, remaining);
            if !budget.chunk.is_positive() {
                if tl.state.break_due(limits) {
                    debug!(at = %tl.state.now, leg = leg.number(), "mandatory break");
                    tl.block(EventKind::Break, limits.break_duration, &en_route)?;
                    tl.state.take_break();
                    continue;
                }
                if leg == Leg::ToPickup {
                    // Leg 1 has no rest rule; surface the gap rather than
                    // leaving the leg silently incomplete.
                    return Err(ScheduleError::LegUnresolved {
                        leg: leg.number(),
                        remaining,
                        binding: budget.binding,
                    });
                }
                // Leg 2 re-checks the caps at the top of the loop; the step
                // budget bounds profiles that never open up.
                continue;
            }

            let miles = budget.chunk.as_hours() * self.average_speed_mph;
            trace!(leg = leg.number(), chunk = %budget.chunk, binding = %budget.binding, miles, "driving");
            tl.block(leg.kind(), budget.chunk, &en_route)?;
            tl.state.record_miles(miles);
            remaining -= budget.chunk;
        }
        Ok(())
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// The event list under construction plus the state it has produced.
struct Timeline<'a, O: ScheduleObserver> {
    limits:   &'a ShiftLimits,
    state:    ShiftState,
    events:   Vec<DutyEvent>,
    observer: &'a mut O,
}

impl<O: ScheduleObserver> Timeline<'_, O> {
    /// Append a `span`-long event of `kind` at `now` and charge it to the
    /// shift accumulators.
    fn block(&mut self, kind: EventKind, span: Minutes, location: &str) -> ScheduleResult<()> {
        let start = self.state.now;
        let end = advance(start, span)?;
        let event = DutyEvent::new(kind, start, end, location);
        self.state.now = end;
        self.state.record(self.limits, event.status, span);
        self.push(event);
        Ok(())
    }

    /// Off-duty filler outside the trip.  Does not touch the accumulators.
    fn pad(&mut self, start: NaiveDateTime, end: NaiveDateTime, location: &str) {
        self.state.now = end;
        self.push(DutyEvent::new(EventKind::Pad, start, end, location));
    }

    fn push(&mut self, event: DutyEvent) {
        self.observer.on_event(&event, &self.state);
        self.events.push(event);
    }
}
