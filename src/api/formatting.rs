//! Solution output formatting
//!
//! Text output mirrors the message front ends relay back to players; JSON and
//! CSV are for HTTP responses and logging.

use crate::core::types::FiringSolution;
use crate::validation::grid::GridReference;
use serde::Serialize;

/// A solution together with the grids it was computed for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    /// Origin grid, upper-cased
    pub origin: String,
    /// Target grid, upper-cased
    pub target: String,
    #[serde(flatten)]
    pub solution: FiringSolution,
}

impl SolutionReport {
    pub fn new(origin: &str, target: &str, solution: FiringSolution) -> Self {
        Self {
            origin: origin.to_uppercase(),
            target: target.to_uppercase(),
            solution,
        }
    }

    pub fn from_references(origin: &GridReference, target: &GridReference, solution: FiringSolution) -> Self {
        Self {
            origin: origin.to_string(),
            target: target.to_string(),
            solution,
        }
    }

    /// Elevation text: mils, or why there is none
    pub fn elevation_text(&self) -> String {
        if self.solution.too_close {
            "too close".to_string()
        } else if self.solution.too_far {
            "too far".to_string()
        } else {
            match self.solution.mils {
                Some(mils) => format!("{} mil", mils),
                None => "n/a".to_string(),
            }
        }
    }
}

/// Human-readable text formatter
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Single-line output
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Format a report as player-facing text
    pub fn format_text(&self, report: &SolutionReport) -> String {
        let solution = &report.solution;
        if self.compact {
            format!(
                "{} -> {} | {} m | {}° | {}",
                report.origin,
                report.target,
                solution.range,
                solution.angle_text(),
                report.elevation_text()
            )
        } else {
            format!(
                "Range: {} m\nBearing: {}° | Elevation: {}\n{} -> {}",
                solution.range,
                solution.angle_text(),
                report.elevation_text(),
                report.origin,
                report.target
            )
        }
    }
}

/// JSON formatter for structured output
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, report: &SolutionReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter for data logging
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "origin,target,angle,range,mils,too_close,too_far".to_string()
    }

    /// One CSV row; empty mils column when there is no elevation
    pub fn format_csv(&self, report: &SolutionReport) -> String {
        let solution = &report.solution;
        let mils = solution.mils.map(|m| m.to_string()).unwrap_or_default();
        let row = format!(
            "{},{},{},{},{},{},{}",
            report.origin,
            report.target,
            solution.angle_text(),
            solution.range,
            mils,
            solution.too_close,
            solution.too_far
        );

        if self.include_header {
            format!("{}\n{}", self.header(), row)
        } else {
            row
        }
    }
}
