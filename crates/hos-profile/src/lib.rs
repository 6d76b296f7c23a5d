//! `hos-profile`: the regulatory profile a schedule is generated under.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`profile`] | `HosProfile` and its rule sub-structs, `StatusFlags`        |
//! | [`limits`]  | `ShiftLimits`: a validated profile in whole minutes         |
//! | [`loader`]  | `load_profile_json`, `load_profile_reader`                  |
//! | [`error`]   | `ProfileError`, `ProfileResult<T>`                          |
//!
//! `HosProfile::default()` is the FMCSA property-carrying profile.  Profiles
//! are plain values: the scheduler reads one through [`ShiftLimits`] and never
//! mutates it.

pub mod error;
pub mod limits;
pub mod loader;
pub mod profile;


pub use error::{ProfileError, ProfileResult};
pub use limits::ShiftLimits;
pub use loader::{load_profile_json, load_profile_reader};
pub use profile::{
    BreakRule, CycleRules, ExceptionRules, FixedBlocks, FuelRule, HosProfile, ShiftRules,
    SleeperBerthRules, StatusFlags, StatusRules,
};
