use crate::algorithms::grid_coordinates::{GridExtent, GridResolver};
use crate::algorithms::range_table::{RangeTable, RangeTableEntry, RangeTableError};
use crate::algorithms::solution::FiringSolutionCalculator;
use crate::core::constants::{GRID_CELL_SIZE_M, MAX_GRID_COLUMNS, MORTAR_RANGE_TABLE};
use crate::validation::error::GridError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "MORTAR_CALC_CONFIG";

/// Grid geometry and weapon table used by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Side length of a top-level grid cell (meters)
    #[serde(default = "default_cell_size")]
    pub cell_size_m: f64,
    /// Supported map columns and rows
    #[serde(default)]
    pub grid_extent: GridExtent,
    /// Range (meters) to elevation (mils) rows
    #[serde(default = "default_range_table")]
    pub range_table: Vec<RangeTableEntry>,
}

fn default_cell_size() -> f64 {
    GRID_CELL_SIZE_M
}

fn default_range_table() -> Vec<RangeTableEntry> {
    MORTAR_RANGE_TABLE
        .iter()
        .map(|&(range_m, mils)| RangeTableEntry { range_m, mils })
        .collect()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            cell_size_m: default_cell_size(),
            grid_extent: GridExtent::default(),
            range_table: default_range_table(),
        }
    }
}

impl CalculatorConfig {
    /// Build a calculator, rejecting configurations that fail validation
    pub fn build_calculator(&self) -> Result<FiringSolutionCalculator, ConfigError> {
        let validation = validate_config(self);
        if let Some(err) = validation.errors.into_iter().next() {
            return Err(err);
        }
        let table = RangeTable::new(self.range_table.clone())?;
        let resolver = GridResolver::new(self.cell_size_m, self.grid_extent)?;
        Ok(FiringSolutionCalculator::new(resolver, table))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("Invalid range table: {0}")]
    RangeTable(#[from] RangeTableError),
    #[error("Invalid grid geometry: {0}")]
    Grid(#[from] GridError),
    #[error("Failed to read or write config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No file path set for saving configuration")]
    NoFilePath,
}

/// Outcome of validating a configuration
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a configuration without applying it
pub fn validate_config(config: &CalculatorConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !config.cell_size_m.is_finite() || config.cell_size_m <= 0.0 {
        result.errors.push(ConfigError::InvalidParameter {
            parameter: "cell_size_m".to_string(),
            value: config.cell_size_m.to_string(),
            reason: "Cell size must be a positive number of meters".to_string(),
        });
    }

    let extent = config.grid_extent;
    if extent.columns == 0 || extent.columns > MAX_GRID_COLUMNS {
        result.errors.push(ConfigError::InvalidParameter {
            parameter: "grid_extent.columns".to_string(),
            value: extent.columns.to_string(),
            reason: format!("Columns are lettered, so 1-{} are supported", MAX_GRID_COLUMNS),
        });
    }
    if extent.rows == 0 {
        result.errors.push(ConfigError::InvalidParameter {
            parameter: "grid_extent.rows".to_string(),
            value: extent.rows.to_string(),
            reason: "At least one row is required".to_string(),
        });
    } else if extent.rows > 99 {
        result
            .warnings
            .push(format!("Rows above 99 cannot be written with two digits ({} configured)", extent.rows));
    }

    match RangeTable::new(config.range_table.clone()) {
        Ok(table) => {
            let decreasing = table.entries().windows(2).all(|w| w[1].mils < w[0].mils);
            if !decreasing {
                result
                    .warnings
                    .push("Range table elevation does not decrease with range".to_string());
            }
        }
        Err(err) => result.errors.push(ConfigError::RangeTable(err)),
    }

    result
}

/// Owns the active configuration and its backing file
#[derive(Debug)]
pub struct ConfigurationManager {
    config: CalculatorConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Manager holding the built-in defaults
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Load the file named by `MORTAR_CALC_CONFIG`, falling back to defaults
    pub fn load_from_env() -> Self {
        let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) else {
            return Self::new();
        };

        match Self::from_file(&path) {
            Ok(manager) => {
                tracing::info!(
                    target: "mortar_calc::config",
                    path = %path.display(),
                    "config.loaded"
                );
                manager
            }
            Err(err) => {
                tracing::warn!(
                    target: "mortar_calc::config",
                    path = %path.display(),
                    error = %err,
                    "config.load_failed"
                );
                Self::new()
            }
        }
    }

    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Replace the configuration after validation
    pub fn update_config(&mut self, config: CalculatorConfig) -> Result<(), ConfigError> {
        let validation = validate_config(&config);
        if let Some(err) = validation.errors.into_iter().next() {
            return Err(err);
        }
        for warning in &validation.warnings {
            tracing::warn!(target: "mortar_calc::config", warning = %warning, "config.warning");
        }

        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Set the top-level cell size, returning the previous value
    pub fn set_cell_size(&mut self, cell_size_m: f64) -> Result<f64, ConfigError> {
        let mut updated = self.config.clone();
        updated.cell_size_m = cell_size_m;
        let previous = self.config.cell_size_m;
        self.update_config(updated)?;
        Ok(previous)
    }

    /// Set the map extent, returning the previous value
    pub fn set_grid_extent(&mut self, extent: GridExtent) -> Result<GridExtent, ConfigError> {
        let mut updated = self.config.clone();
        updated.grid_extent = extent;
        let previous = self.config.grid_extent;
        self.update_config(updated)?;
        Ok(previous)
    }

    /// Replace the range table
    pub fn set_range_table(&mut self, entries: Vec<RangeTableEntry>) -> Result<(), ConfigError> {
        let mut updated = self.config.clone();
        updated.range_table = entries;
        self.update_config(updated)
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: CalculatorConfig = serde_json::from_str(&content)?;
        self.update_config(config)?;

        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.config)?;

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::NoFilePath),
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Calculator for the active configuration
    pub fn calculator(&self) -> Result<FiringSolutionCalculator, ConfigError> {
        self.config.build_calculator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("mortar_calc_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.cell_size_m, 300.0);
        assert_eq!(config.grid_extent, GridExtent { columns: 26, rows: 99 });
        assert_eq!(config.range_table.len(), 25);
        assert!(validate_config(&config).is_valid());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CalculatorConfig = serde_json::from_str(r#"{ "cell_size_m": 200.0 }"#).unwrap();
        assert_eq!(config.cell_size_m, 200.0);
        assert_eq!(config.grid_extent, GridExtent::default());
        assert_eq!(config.range_table, CalculatorConfig::default().range_table);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CalculatorConfig {
            cell_size_m: -1.0,
            grid_extent: GridExtent { columns: 30, rows: 0 },
            range_table: vec![RangeTableEntry { range_m: 50.0, mils: 1579.0 }],
        };

        let result = validate_config(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 4);
        assert!(config.build_calculator().is_err());
    }

    #[test]
    fn test_non_decreasing_table_warns() {
        let config = CalculatorConfig {
            range_table: vec![
                RangeTableEntry { range_m: 100.0, mils: 900.0 },
                RangeTableEntry { range_m: 200.0, mils: 1000.0 },
            ],
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_runtime_cell_size_adjustment() {
        let mut manager = ConfigurationManager::new();

        let previous = manager.set_cell_size(150.0).unwrap();
        assert_eq!(previous, 300.0);
        assert_eq!(manager.get_config().cell_size_m, 150.0);
        assert!(manager.is_modified());

        assert!(manager.set_cell_size(0.0).is_err());
        assert!(manager.set_cell_size(f64::NAN).is_err());
        assert_eq!(manager.get_config().cell_size_m, 150.0);
    }

    #[test]
    fn test_range_table_replacement() {
        let mut manager = ConfigurationManager::new();
        let err = manager
            .set_range_table(vec![RangeTableEntry { range_m: 10.0, mils: 1.0 }])
            .unwrap_err();
        assert!(matches!(err, ConfigError::RangeTable(RangeTableError::TooFewEntries { count: 1 })));

        manager
            .set_range_table(vec![
                RangeTableEntry { range_m: 100.0, mils: 1200.0 },
                RangeTableEntry { range_m: 600.0, mils: 1000.0 },
            ])
            .unwrap();
        let calc = manager.calculator().unwrap();
        assert_eq!(calc.range_table().max_range(), 600.0);
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = temp_config_path("round_trip");
        let mut manager = ConfigurationManager::new();
        manager.set_grid_extent(GridExtent { columns: 12, rows: 12 }).unwrap();
        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(loaded.get_config(), manager.get_config());
        assert!(!loaded.is_modified());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_and_corrupt_files() {
        let missing = temp_config_path("missing");
        let err = ConfigurationManager::from_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let corrupt = temp_config_path("corrupt");
        fs::write(&corrupt, "{ not json").unwrap();
        let err = ConfigurationManager::from_file(&corrupt).unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
        let _ = fs::remove_file(corrupt);
    }

    #[test]
    fn test_save_without_path() {
        let mut manager = ConfigurationManager::new();
        assert!(matches!(manager.save(), Err(ConfigError::NoFilePath)));
    }
}
