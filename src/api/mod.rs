//! Front-end facing API
//!
//! Request/response types, the fire-control entry point and output formatters.

pub mod calculator;
pub mod formatting;
pub mod types;

pub use calculator::FireControlApi;
pub use formatting::{CsvFormatter, JsonFormatter, SolutionReport, TextFormatter};
pub use types::{ApiError, ApiResult, GridRole, SolutionRequest};
