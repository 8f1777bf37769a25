//! Configuration types for the availability service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{Period, PeriodId, PeriodTable, Weekday};

/// One period entry in `periods.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodEntry {
    /// The period identifier.
    pub id: PeriodId,
    /// Start hour (0-23).
    pub start_hour: u32,
    /// Start minute (0-59).
    pub start_minute: u32,
    /// End hour (0-23).
    pub end_hour: u32,
    /// End minute (0-59).
    pub end_minute: u32,
}

impl PeriodEntry {
    /// Converts the entry into a validated [`Period`].
    pub fn to_period(&self) -> EngineResult<Period> {
        Period::from_hm(
            self.id,
            (self.start_hour, self.start_minute),
            (self.end_hour, self.end_minute),
        )
    }
}

/// Period configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodsConfig {
    /// The configured periods.
    pub periods: Vec<PeriodEntry>,
}

impl PeriodsConfig {
    /// Builds the period table, validating every entry.
    pub fn to_table(&self) -> EngineResult<PeriodTable> {
        let periods = self
            .periods
            .iter()
            .map(PeriodEntry::to_period)
            .collect::<EngineResult<Vec<_>>>()?;
        PeriodTable::new(periods)
    }
}

fn default_matrix_weekdays() -> Vec<Weekday> {
    Weekday::SCHOOL_DAYS.to_vec()
}

/// Service configuration file structure (`service.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Path to the room list CSV, relative to the configuration directory.
    pub rooms_path: PathBuf,
    /// Path to the reservation CSV, relative to the configuration directory.
    pub schedules_path: PathBuf,
    /// Weekday columns of the weekly matrix.
    #[serde(default = "default_matrix_weekdays")]
    pub matrix_weekdays: Vec<Weekday>,
}

/// The complete, validated configuration.
#[derive(Debug, Clone)]
pub struct AvailabilityConfig {
    periods: PeriodTable,
    rooms_path: PathBuf,
    schedules_path: PathBuf,
    matrix_weekdays: Vec<Weekday>,
}

impl AvailabilityConfig {
    /// Creates a new configuration from its parts.
    pub fn new(
        periods: PeriodTable,
        rooms_path: impl Into<PathBuf>,
        schedules_path: impl Into<PathBuf>,
        matrix_weekdays: Vec<Weekday>,
    ) -> Self {
        Self {
            periods,
            rooms_path: rooms_path.into(),
            schedules_path: schedules_path.into(),
            matrix_weekdays,
        }
    }

    /// Returns the period table.
    pub fn periods(&self) -> &PeriodTable {
        &self.periods
    }

    /// Returns the room list path.
    pub fn rooms_path(&self) -> &PathBuf {
        &self.rooms_path
    }

    /// Returns the reservation rows path.
    pub fn schedules_path(&self) -> &PathBuf {
        &self.schedules_path
    }

    /// Returns the weekly matrix weekday columns.
    pub fn matrix_weekdays(&self) -> &[Weekday] {
        &self.matrix_weekdays
    }
}
