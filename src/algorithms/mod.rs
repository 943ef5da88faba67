//! Fire solution algorithms

pub mod vector;
pub mod grid_coordinates;
pub mod range_table;
pub mod solution;

pub use grid_coordinates::{GridExtent, GridResolver};
pub use range_table::{Interpolation, RangeTable, RangeTableEntry, RangeTableError};
pub use solution::FiringSolutionCalculator;
