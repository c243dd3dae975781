// crates/rgbsc-core/src/profile/mod.rs

pub mod checksum;
pub mod defaults;
pub mod format;
pub mod profile;
