//! Pre-configured display specifications

pub mod pimoroni;

pub use pimoroni::*;
