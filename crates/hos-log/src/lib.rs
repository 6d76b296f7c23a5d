//! `hos-log`: per-calendar-day duty logs.
//!
//! [`split_events_into_days`] walks a contiguous event sequence and cuts
//! every event at each local midnight it crosses.  Each piece lands in the
//! [`DailyLog`] for its own date, which accumulates hours per status and
//! driving mileage.  One `DailyLog` corresponds to one ELD grid.
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`daily`]      | `DailyLog`, `StatusTotals`                           |
//! | [`partition`]  | `split_events_into_days`                             |
//! | [`contiguity`] | `check_contiguous`                                   |
//! | [`error`]      | `LogError`, `LogResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_log::{check_contiguous, split_events_into_days};
//!
//! check_contiguous(&events)?;
//! for day in split_events_into_days(&events, 50.0)? {
//!     println!("{} driving {:.2} h, {:.0} mi", day.date, day.totals.driving, day.total_miles);
//! }
//! ```

pub mod contiguity;
pub mod daily;
pub mod error;
pub mod partition;


pub use contiguity::check_contiguous;
pub use daily::{DailyLog, StatusTotals};
pub use error::{LogError, LogResult};
pub use partition::split_events_into_days;
