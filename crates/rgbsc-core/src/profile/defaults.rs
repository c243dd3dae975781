// crates/rgbsc-core/src/profile/defaults.rs

use crate::profile::profile::Profile;
use crate::signal::color::ColorState;
use crate::signal::transition::{offset_for, DATA_RING};

pub const PROFILE_VERSION: u16 = 1;

/// Idle samples per byte before the decoder gives up on a stalled channel.
pub const DEFAULT_MAX_IDLE: u32 = 1024;

/// The reference assignment: Blue..Magenta ring, White ends a byte, Yellow is the spare mark.
pub fn standard_profile() -> Profile {
    Profile {
        version: PROFILE_VERSION,
        ring: DATA_RING,
        offsets: ColorState::ALL.map(offset_for),
        end_mark: ColorState::White,
        alt_mark: ColorState::Yellow,
        max_idle: DEFAULT_MAX_IDLE,
        strict: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_offsets_match_reference_table() {
        let p = standard_profile();
        assert_eq!(p.offsets, [0, 1, 2, 3, 4, 5, 0, 0]);
        assert_eq!(p.end_mark, ColorState::White);
        assert_eq!(p.alt_mark, ColorState::Yellow);
        assert!(crate::validate::validate_profile(&p).is_ok());
    }
}
