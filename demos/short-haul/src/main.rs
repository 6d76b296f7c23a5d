//! short-haul: schedule one trip and print its daily logs.
//!
//! ```text
//! short-haul [START_TIME] [PROFILE_JSON] [--json]
//! ```
//!
//! `START_TIME` defaults to `2024-03-01T08:00`.  Without `PROFILE_JSON` the
//! FMCSA property-carrying profile is used.  `--json` prints the daily logs
//! as JSON instead of a table.  Set `RUST_LOG=debug` to see inserted breaks
//! and rests.

mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hos_core::DutyStatus;
use hos_log::{check_contiguous, split_events_into_days};
use hos_profile::{HosProfile, load_profile_json};
use hos_schedule::TripRequest;

use route::chicago_to_nashville;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_START:     &str = "2024-03-01T08:00";
const AVERAGE_SPEED_MPH: f64  = 65.0;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));
    let start_time = positional.next().map_or(DEFAULT_START, String::as_str).to_owned();

    // 1. Profile.
    let profile = match positional.next() {
        Some(path) => load_profile_json(Path::new(path))
            .with_context(|| format!("loading profile {path}"))?,
        None => HosProfile::default(),
    };
    info!(profile = %profile.name, "using HOS profile");

    // 2. Schedule.
    let request = TripRequest {
        route: chicago_to_nashville(),
        start_time,
        profile,
        average_speed_mph: AVERAGE_SPEED_MPH,
    };
    let events = request.schedule().context("scheduling trip")?;
    check_contiguous(&events)?;
    info!(events = events.len(), "schedule generated");

    // 3. Daily logs.
    let days = split_events_into_days(&events, AVERAGE_SPEED_MPH)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    println!("=== short-haul: {} → {} → {} ===",
        request.route.origin.address,
        request.route.pickup.address,
        request.route.dropoff.address,
    );
    println!();
    println!("{:<12} {:>8} {:>8} {:>8} {:>8} {:>8}", "Date", "Off", "Sleeper", "Driving", "On duty", "Miles");
    println!("{}", "-".repeat(58));
    for day in &days {
        let t = &day.totals;
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.0}",
            day.date.to_string(),
            t.get(DutyStatus::OffDuty),
            t.get(DutyStatus::SleeperBerth),
            t.get(DutyStatus::Driving),
            t.get(DutyStatus::OnDutyNotDriving),
            day.total_miles,
        );
    }
    println!();

    println!("{:<6} {:<6} {:<20} {:<24} {}", "Start", "End", "Status", "Remark", "Location");
    println!("{}", "-".repeat(80));
    for e in &events {
        println!(
            "{:<6} {:<6} {:<20} {:<24} {}",
            e.start.format("%H:%M"),
            e.end.format("%H:%M"),
            e.status,
            e.remarks,
            e.location,
        );
    }

    Ok(())
}
