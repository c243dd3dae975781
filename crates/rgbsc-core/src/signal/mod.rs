// crates/rgbsc-core/src/signal/mod.rs

pub mod bitpack;
pub mod color;
pub mod sample;
pub mod sequence;
pub mod transition;
