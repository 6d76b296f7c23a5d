//! JSON profile loader.
//!
//! The profile is validated right after parsing, so a file that loads
//! successfully is guaranteed to produce [`ShiftLimits`][crate::ShiftLimits].

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{HosProfile, ProfileError, ProfileResult};

/// Load and validate a profile from a JSON file.
pub fn load_profile_json(path: &Path) -> ProfileResult<HosProfile> {
    let file = std::fs::File::open(path).map_err(ProfileError::Io)?;
    let profile = load_profile_reader(std::io::BufReader::new(file))?;
    debug!(path = %path.display(), name = %profile.name, "loaded HOS profile");
    Ok(profile)
}

/// Like [`load_profile_json`] but accepts any `Read` source.
pub fn load_profile_reader<R: Read>(reader: R) -> ProfileResult<HosProfile> {
    let profile: HosProfile = serde_json::from_reader(reader)?;
    profile.limits()?;
    Ok(profile)
}
