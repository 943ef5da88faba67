//! Empirical range table and elevation interpolation
//!
//! Elevation between two table rows is read off the straight line through
//! them. Ranges outside the table span are reported as out of bounds rather
//! than extrapolated.

use crate::core::constants::MORTAR_RANGE_TABLE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of a range table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeTableEntry {
    pub range_m: f64,
    pub mils: f64,
}

/// Outcome of an elevation lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    /// Elevation in mils (unrounded)
    Elevation(f64),
    /// Range lies outside the table; extrapolation would be required
    OutOfBounds,
}

impl Interpolation {
    pub fn mils(self) -> Option<f64> {
        match self {
            Interpolation::Elevation(mils) => Some(mils),
            Interpolation::OutOfBounds => None,
        }
    }
}

/// Reasons a set of rows cannot form a range table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeTableError {
    #[error("Range table needs at least 2 entries, got {count}")]
    TooFewEntries { count: usize },
    #[error("Range table entry {index} is not finite")]
    NonFinite { index: usize },
    #[error("Range table has duplicate range {range_m} m")]
    DuplicateRange { range_m: f64 },
}

/// Ascending, de-duplicated mapping from range (meters) to elevation (mils)
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    entries: Vec<RangeTableEntry>,
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::standard_mortar()
    }
}

impl RangeTable {
    /// Build a table from rows in any order
    pub fn new(mut entries: Vec<RangeTableEntry>) -> Result<Self, RangeTableError> {
        if entries.len() < 2 {
            return Err(RangeTableError::TooFewEntries { count: entries.len() });
        }
        if let Some(index) = entries
            .iter()
            .position(|e| !e.range_m.is_finite() || !e.mils.is_finite())
        {
            return Err(RangeTableError::NonFinite { index });
        }

        entries.sort_by(|a, b| a.range_m.total_cmp(&b.range_m));
        if let Some(pair) = entries.windows(2).find(|w| w[0].range_m == w[1].range_m) {
            return Err(RangeTableError::DuplicateRange { range_m: pair[0].range_m });
        }

        Ok(Self { entries })
    }

    /// Built-in mortar table, 50-1250 m in 50 m steps
    pub fn standard_mortar() -> Self {
        Self {
            entries: MORTAR_RANGE_TABLE
                .iter()
                .map(|&(range_m, mils)| RangeTableEntry { range_m, mils })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[RangeTableEntry] {
        &self.entries
    }

    /// Shortest tabulated range
    pub fn min_range(&self) -> f64 {
        self.entries[0].range_m
    }

    /// Longest tabulated range
    pub fn max_range(&self) -> f64 {
        self.entries[self.entries.len() - 1].range_m
    }

    /// Tabulated elevation for an exact range key
    pub fn lookup(&self, range_m: f64) -> Option<f64> {
        self.entries
            .binary_search_by(|e| e.range_m.total_cmp(&range_m))
            .ok()
            .map(|idx| self.entries[idx].mils)
    }

    /// Elevation for `desired_range`
    ///
    /// Exact keys return the tabulated value; anything else is interpolated
    /// between the nearest key strictly below and strictly above.
    pub fn interpolate(&self, desired_range: f64) -> Interpolation {
        if let Some(mils) = self.lookup(desired_range) {
            return Interpolation::Elevation(mils);
        }

        // First entry strictly above the desired range
        let upper = self.entries.partition_point(|e| e.range_m <= desired_range);
        if upper == 0 || upper == self.entries.len() {
            return Interpolation::OutOfBounds;
        }

        let lo = self.entries[upper - 1];
        let hi = self.entries[upper];
        Interpolation::Elevation(linear_interpolation(
            desired_range,
            lo.range_m,
            lo.mils,
            hi.range_m,
            hi.mils,
        ))
    }

    pub fn is_too_close(&self, range_m: f64) -> bool {
        range_m < self.min_range()
    }

    pub fn is_too_far(&self, range_m: f64) -> bool {
        range_m > self.max_range()
    }
}

/// Evaluate the line through (x1, y1) and (x2, y2) at `x`
pub fn linear_interpolation(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let slope = (y2 - y1) / (x2 - x1);
    let intercept = y2 - slope * x2;
    slope * x + intercept
}
