//! `hos-schedule`: the hours-of-service duty-event scheduler.
//!
//! # Sequence
//!
//! ```text
//! ① Pad          off duty from local midnight to the start time
//! ② Pre-trip     inspection block
//! ③ Leg 1        drive origin → pickup; 30-minute breaks as required
//! ④ Pickup       loading block
//! ⑤ Leg 2        drive pickup → dropoff; fuel stops, breaks, and full
//!                sleeper-berth rests whenever a shift cap is reached
//! ⑥ Dropoff      unloading block
//! ⑦ Post-trip    inspection block
//! ⑧ Pad          off duty to 23:59:59.999 of the final day
//! ```
//!
//! Every driving chunk is the largest span allowed by the tightest of four
//! limits: time left on the leg, driving left in the shift, duty window left
//! in the shift, and driving left before a break is due.
//!
//! The output is gapless: `events[i].end == events[i + 1].start`, and the
//! first and last calendar days are covered midnight to midnight.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`state`]     | `ShiftState`, `DriveBudget`, `Constraint`                |
//! | [`scheduler`] | `Scheduler` (validated inputs + the run loop)            |
//! | [`observer`]  | `ScheduleObserver` trait, `NoopObserver`                 |
//! | [`markers`]   | `place_markers`: display positions for map markers     |
//! | [`request`]   | `TripRequest`, `generate_duty_events`                    |
//! | [`batch`]     | `schedule_batch` (Rayon with the `parallel` feature)     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `schedule_batch` on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_profile::HosProfile;
//! use hos_schedule::generate_duty_events;
//!
//! let start = hos_core::time::parse_timestamp("2024-03-01T08:00")?;
//! let events = generate_duty_events(&route, start, &HosProfile::default(), 50.0)?;
//! ```

pub mod batch;
pub mod error;
pub mod markers;
pub mod observer;
pub mod request;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod tests;

pub use batch::schedule_batch;
pub use error::{ScheduleError, ScheduleResult};
pub use markers::place_markers;
pub use observer::{NoopObserver, ScheduleObserver};
pub use request::{TripRequest, generate_duty_events};
pub use scheduler::{DEFAULT_STEP_BUDGET, Scheduler};
pub use state::{Constraint, DriveBudget, ShiftState};
