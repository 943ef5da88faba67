//! Core types and constants for the fire solution calculator

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
