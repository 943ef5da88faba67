use thiserror::Error;

/// Result type for grid parsing and resolution
pub type GridResult<T> = Result<T, GridError>;

/// Failures turning grid reference text into a map position
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Text does not match the grid grammar
    #[error("Malformed grid reference: {input:?}")]
    Malformed { input: String },
    /// Column letter has no entry in the column map
    #[error("Unsupported grid column '{column}' (map has {max_columns} columns)")]
    UnsupportedColumn { column: char, max_columns: u8 },
    /// Row number beyond the configured map extent
    #[error("Grid row {row} out of range (map has {max_rows} rows)")]
    RowOutOfRange { row: u32, max_rows: u8 },
    /// Subgrid digit with no keypad direction
    #[error("Subgrid digit '{digit}' at position {position} has no keypad direction (expected 1-9)")]
    UnmappedSubgridDigit { digit: char, position: usize },
    /// Top-level cell size that cannot produce finite coordinates
    #[error("Invalid grid cell size {cell_size_m} m (must be finite and positive)")]
    InvalidCellSize { cell_size_m: f64 },
    /// Displacement between two positions is not a finite vector
    #[error("Non-finite displacement ({x}, {y})")]
    NonFiniteDisplacement { x: f64, y: f64 },
}

impl GridError {
    /// True for grammar failures, false for well-formed references the map cannot place
    pub fn is_malformed(&self) -> bool {
        matches!(self, GridError::Malformed { .. })
    }
}
