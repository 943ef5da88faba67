//! Common API types and data structures

use crate::validation::error::GridError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Which side of a request a grid reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridRole {
    Origin,
    Target,
}

/// API error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Origin text does not follow the grid grammar
    #[error("Origin grid {grid:?} is not readable")]
    InvalidOrigin { grid: String },
    /// Target text does not follow the grid grammar
    #[error("Target grid {grid:?} is not readable")]
    InvalidTarget { grid: String },
    /// Origin is well-formed but cannot be placed on the map
    #[error("Origin grid {grid:?} is outside the map: {source}")]
    UnresolvableOrigin { grid: String, source: GridError },
    /// Target is well-formed but cannot be placed on the map
    #[error("Target grid {grid:?} is outside the map: {source}")]
    UnresolvableTarget { grid: String, source: GridError },
    /// Calculator could not be built from configuration
    #[error("Invalid configuration: {reason}")]
    ConfigurationError { reason: String },
    /// Both grids resolved but no solution could be derived
    #[error("Solution failed: {reason}")]
    SolutionError { reason: String },
}

impl ApiError {
    /// Map a grid failure onto the request side it came from
    pub fn from_grid_error(role: GridRole, grid: &str, error: GridError) -> Self {
        let grid = grid.to_string();
        match (role, error.is_malformed()) {
            (GridRole::Origin, true) => ApiError::InvalidOrigin { grid },
            (GridRole::Target, true) => ApiError::InvalidTarget { grid },
            (GridRole::Origin, false) => ApiError::UnresolvableOrigin { grid, source: error },
            (GridRole::Target, false) => ApiError::UnresolvableTarget { grid, source: error },
        }
    }

    /// True when the failure is a formatting problem rather than an unsupported value
    pub fn is_format_error(&self) -> bool {
        matches!(self, ApiError::InvalidOrigin { .. } | ApiError::InvalidTarget { .. })
    }

    /// Request side the error refers to, if any
    pub fn role(&self) -> Option<GridRole> {
        match self {
            ApiError::InvalidOrigin { .. } | ApiError::UnresolvableOrigin { .. } => Some(GridRole::Origin),
            ApiError::InvalidTarget { .. } | ApiError::UnresolvableTarget { .. } => Some(GridRole::Target),
            ApiError::ConfigurationError { .. } | ApiError::SolutionError { .. } => None,
        }
    }
}

/// Two grid references as received from a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRequest {
    pub origin: String,
    pub target: String,
}

impl SolutionRequest {
    pub fn new(origin: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            target: target.into(),
        }
    }
}
