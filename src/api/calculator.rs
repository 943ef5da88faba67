//! Synchronous fire-control API for front ends
//!
//! Front ends hand over two already-extracted grid strings and get back either
//! a solution or an error saying which grid was unusable and why.

use crate::algorithms::solution::FiringSolutionCalculator;
use crate::api::types::{ApiError, ApiResult, GridRole, SolutionRequest};
use crate::core::types::{FiringSolution, Position};
use crate::utils::config::CalculatorConfig;
use crate::validation::grid::{validate_grid, GridReference};

/// Entry point used by chat and HTTP front ends
#[derive(Debug, Clone, Default)]
pub struct FireControlApi {
    calculator: FiringSolutionCalculator,
}

impl FireControlApi {
    /// API using the built-in grid and mortar table
    pub fn new() -> Self {
        Self::default()
    }

    /// API for a specific configuration
    pub fn with_config(config: &CalculatorConfig) -> ApiResult<Self> {
        let calculator = config
            .build_calculator()
            .map_err(|err| ApiError::ConfigurationError { reason: err.to_string() })?;
        Ok(Self { calculator })
    }

    pub fn calculator(&self) -> &FiringSolutionCalculator {
        &self.calculator
    }

    /// Grammar check only
    pub fn validate(&self, grid: &str) -> bool {
        validate_grid(grid)
    }

    /// Parse and resolve a single grid, reporting failures against `role`
    pub fn check_grid(&self, role: GridRole, grid: &str) -> ApiResult<GridReference> {
        self.locate(role, grid).map(|(reference, _)| reference)
    }

    fn locate(&self, role: GridRole, grid: &str) -> ApiResult<(GridReference, Position)> {
        let reference = GridReference::parse(grid)
            .map_err(|err| ApiError::from_grid_error(role, grid, err))?;
        let position = self
            .calculator
            .resolver()
            .resolve(&reference)
            .map_err(|err| ApiError::from_grid_error(role, grid, err))?;
        Ok((reference, position))
    }

    /// Solution for a request; the origin is checked before the target
    pub fn calculate(&self, request: &SolutionRequest) -> ApiResult<FiringSolution> {
        let (origin, origin_pos) = self.locate(GridRole::Origin, &request.origin)?;
        let (target, target_pos) = self.locate(GridRole::Target, &request.target)?;

        let solution = self
            .calculator
            .solve_positions(&origin_pos, &target_pos)
            .map_err(|err| {
                tracing::warn!(
                    target: "mortar_calc::api",
                    origin_grid = %origin,
                    target_grid = %target,
                    error = %err,
                    "solution.failed"
                );
                ApiError::SolutionError { reason: err.to_string() }
            })?;

        tracing::debug!(
            target: "mortar_calc::api",
            origin_grid = %origin,
            target_grid = %target,
            range = solution.range,
            bearing = solution.bearing_deg,
            mils = ?solution.mils,
            "solution.computed"
        );
        Ok(solution)
    }

    /// Convenience wrapper over [`FireControlApi::calculate`]
    pub fn calculate_grids(&self, origin: &str, target: &str) -> ApiResult<FiringSolution> {
        self.calculate(&SolutionRequest::new(origin, target))
    }
}
