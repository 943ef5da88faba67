//! Mortar Fire Solution Calculator
//!
//! Converts hierarchical grid references (`E5-267`) into map coordinates and
//! derives bearing, range and elevation in mils between two of them using an
//! empirical mortar range table.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{FiringSolution, Position, GRID_CELL_SIZE_M};
pub use crate::algorithms::{
    FiringSolutionCalculator, GridExtent, GridResolver, Interpolation, RangeTable, RangeTableEntry,
};
pub use crate::validation::{validate_grid, GridError, GridReference, GridResult};
pub use crate::utils::{CalculatorConfig, ConfigError, ConfigurationManager};
pub use crate::api::{
    ApiError, ApiResult, CsvFormatter, FireControlApi, GridRole, JsonFormatter, SolutionReport,
    SolutionRequest, TextFormatter,
};

/// Solution from `origin` to `target` using the built-in grid and mortar table
///
/// Both strings should pass [`validate_grid`] first; well-formed references the
/// map cannot place are still reported as [`GridError`] values.
pub fn calculate_solution(origin: &str, target: &str) -> GridResult<FiringSolution> {
    FiringSolutionCalculator::default().solve_str(origin, target)
}
