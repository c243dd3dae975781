// crates/rgbsc-cli/src/cmd/mod.rs

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod profile;
pub mod show;
pub mod sim;
pub mod table;
