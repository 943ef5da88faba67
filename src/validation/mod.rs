//! Grid reference validation and error types

pub mod error;
pub mod grid;

pub use error::{GridError, GridResult};
pub use grid::{validate_grid, GridReference};
