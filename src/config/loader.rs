//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! availability configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Period, PeriodId, PeriodTable, Weekday};

use super::types::{AvailabilityConfig, PeriodsConfig, ServiceConfig};

/// Loads and provides access to the availability configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── periods.yaml   # Period table
/// └── service.yaml   # Data source paths and weekly matrix columns
/// ```
///
/// Data source paths in `service.yaml` are resolved against the
/// configuration directory.
///
/// # Example
///
/// ```no_run
/// use room_availability::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let first = loader.get_period(1).unwrap();
/// println!("Period 1 starts at minute {}", first.start_minute);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AvailabilityConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The period table is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let periods_path = path.join("periods.yaml");
        let periods_config = Self::load_yaml::<PeriodsConfig>(&periods_path)?;
        let periods = periods_config
            .to_table()
            .map_err(|e| EngineError::ConfigParseError {
                path: periods_path.display().to_string(),
                message: e.to_string(),
            })?;

        let service_path = path.join("service.yaml");
        let service = Self::load_yaml::<ServiceConfig>(&service_path)?;

        let config = AvailabilityConfig::new(
            periods,
            path.join(&service.rooms_path),
            path.join(&service.schedules_path),
            service.matrix_weekdays,
        );

        Ok(Self { config })
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: AvailabilityConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AvailabilityConfig {
        &self.config
    }

    /// Returns the period table.
    pub fn periods(&self) -> &PeriodTable {
        self.config.periods()
    }

    /// Gets a period by its identifier.
    ///
    /// Returns the period if found, or `UnknownPeriod` error.
    pub fn get_period(&self, id: PeriodId) -> EngineResult<&Period> {
        self.config.periods().resolve(id)
    }

    /// Returns the weekday columns of the weekly matrix.
    pub fn matrix_weekdays(&self) -> &[Weekday] {
        self.config.matrix_weekdays()
    }
}
