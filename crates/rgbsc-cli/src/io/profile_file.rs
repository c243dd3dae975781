// crates/rgbsc-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use rgbsc_core::profile::defaults::standard_profile;
use rgbsc_core::profile::format as profile_format;
use rgbsc_core::validate::validate_profile;
use rgbsc_core::Profile;

/// Load a .rgbp profile file; checksums and codec rules are both enforced.
pub fn load_rgbp(path: &str) -> Result<Profile> {
    let bytes = std::fs::read(path).with_context(|| format!("read profile {path}"))?;
    let profile = profile_format::decode(&bytes).with_context(|| format!("decode profile {path}"))?;
    validate_profile(&profile).with_context(|| format!("validate profile {path}"))?;
    Ok(profile)
}

/// `--profile` if given, otherwise the standard assignment.
pub fn load_or_standard(path: Option<&str>) -> Result<Profile> {
    match path {
        Some(p) => load_rgbp(p),
        None => Ok(standard_profile()),
    }
}

pub fn save_rgbp(path: &str, profile: &Profile) -> Result<()> {
    let bytes = profile_format::encode(profile);
    std::fs::write(path, bytes).with_context(|| format!("write profile {path}"))?;
    Ok(())
}
