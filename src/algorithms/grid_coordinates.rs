//! Grid reference to map coordinate resolution
//!
//! A reference such as `E5-267` names the 300 m cell at column E, row 5, then
//! narrows it with keypad digits: each digit picks one of the nine sub-cells of
//! the current cell (100 m, then 33 m, then 11 m ...). The resolved point is the
//! centre of the innermost cell.
//!
//! The y axis is inverted once all offsets are applied, so the returned position
//! feeds the compass bearing math in [`crate::algorithms::vector`] directly.

use crate::algorithms::vector::{add, scale, Vec2};
use crate::core::constants::{
    column_index, keypad_offset, DEFAULT_GRID_ROWS, GRID_CELL_SIZE_M, MAX_GRID_COLUMNS,
    SUBGRID_DIVISIONS,
};
use crate::core::types::Position;
use crate::validation::error::{GridError, GridResult};
use crate::validation::grid::GridReference;
use serde::{Deserialize, Serialize};

/// Number of top-level columns and rows the map supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExtent {
    pub columns: u8,
    pub rows: u8,
}

impl Default for GridExtent {
    fn default() -> Self {
        Self {
            columns: MAX_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

/// Resolves grid references against a fixed cell size and map extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridResolver {
    cell_size_m: f64,
    extent: GridExtent,
}

impl Default for GridResolver {
    fn default() -> Self {
        Self {
            cell_size_m: GRID_CELL_SIZE_M,
            extent: GridExtent::default(),
        }
    }
}

impl GridResolver {
    /// Resolver for `cell_size_m` meter cells; the size must be finite and positive
    pub fn new(cell_size_m: f64, extent: GridExtent) -> GridResult<Self> {
        if !cell_size_m.is_finite() || cell_size_m <= 0.0 {
            return Err(GridError::InvalidCellSize { cell_size_m });
        }
        Ok(Self { cell_size_m, extent })
    }

    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Centre of the innermost cell named by `reference`
    pub fn resolve(&self, reference: &GridReference) -> GridResult<Position> {
        let column = column_index(reference.column())
            .filter(|&c| c <= self.extent.columns)
            .ok_or(GridError::UnsupportedColumn {
                column: reference.column(),
                max_columns: self.extent.columns,
            })?;

        // Row 0 is accepted and lands one cell above row 1
        let row = reference.row();
        if row > u32::from(self.extent.rows) {
            return Err(GridError::RowOutOfRange {
                row,
                max_rows: self.extent.rows,
            });
        }

        let half = self.cell_size_m * 0.5;
        let origin_offset = Vec2::new(
            f64::from(column - 1) * self.cell_size_m,
            (f64::from(row) - 1.0) * self.cell_size_m,
        );
        let mut pos = add(&Vec2::new(half, half), &origin_offset);

        let mut current_size = self.cell_size_m;
        for (index, digit) in reference.subgrid().chars().enumerate() {
            current_size /= SUBGRID_DIVISIONS;

            let (dx, dy) = keypad_offset(digit).ok_or(GridError::UnmappedSubgridDigit {
                digit,
                position: index + 1,
            })?;
            let step = scale(&Vec2::new(f64::from(dx), f64::from(dy)), current_size);
            pos = add(&pos, &step);
        }

        pos.y = -pos.y;
        Ok(Position::from_vector(pos))
    }

    /// Parse and resolve in one step
    pub fn resolve_str(&self, text: &str) -> GridResult<Position> {
        let reference = GridReference::parse(text)?;
        self.resolve(&reference)
    }
}

/// Resolve with an explicit top-level cell size and the default map extent
pub fn resolve(reference: &GridReference, cell_size_m: f64) -> GridResult<Position> {
    GridResolver::new(cell_size_m, GridExtent::default())?.resolve(reference)
}
