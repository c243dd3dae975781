// crates/rgbsc-core/src/profile/profile.rs

use crate::signal::color::ColorState;

/// Codec parameters: ring order, offset table, mark assignment and decoder limits.
///
/// Fields are plain data; `validate::validate_profile` decides whether a
/// profile is usable, and `Codec::new` refuses anything it rejects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub version: u16,

    /// Data colors in slot order.
    pub ring: [ColorState; 5],

    /// Ring rotation applied after each previous color, indexed by `ColorState::index`.
    pub offsets: [u8; 8],

    /// Emitted by the encoder after every byte; decoded as `Signal::Mark1`.
    pub end_mark: ColorState,

    /// Never emitted by the encoder; decoded as `Signal::Mark2`.
    pub alt_mark: ColorState,

    /// Idle samples tolerated while assembling one byte before reporting a stall.
    pub max_idle: u32,

    /// Reject data transitions the encoder cannot produce instead of folding them mod 4.
    pub strict: bool,
}

impl Default for Profile {
    fn default() -> Self {
        crate::profile::defaults::standard_profile()
    }
}
