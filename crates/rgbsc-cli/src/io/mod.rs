// crates/rgbsc-cli/src/io/mod.rs

pub mod profile_file;
pub mod rgbs;
pub mod text;
