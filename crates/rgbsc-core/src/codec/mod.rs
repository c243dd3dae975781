// crates/rgbsc-core/src/codec/mod.rs

pub mod decode;
pub mod encode;
pub mod table;
