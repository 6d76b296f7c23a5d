//! `hos-core`: foundational types for the hos scheduling workspace.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, great-circle distance in miles                |
//! | [`time`]    | `Minutes`, calendar-day helpers, timestamp parsing        |
//! | [`status`]  | `DutyStatus`, `EventKind`                                 |
//! | [`event`]   | `DutyEvent`                                               |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod event;
pub mod geo;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use event::DutyEvent;
pub use geo::GeoPoint;
pub use status::{DutyStatus, EventKind};
pub use time::Minutes;
