//! Application state for the availability API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::availability::ScheduleSnapshot;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::source::CsvDataSource;

/// Shared application state.
///
/// Only the immutable configuration is shared between requests. Every
/// request reads the data source again and works on its own snapshot, so
/// handlers never need a lock.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the data source named by the configuration.
    pub fn data_source(&self) -> CsvDataSource {
        CsvDataSource::from_config(self.config.config())
    }

    /// Reads the data source and builds a snapshot for one request.
    pub fn snapshot(&self) -> EngineResult<ScheduleSnapshot> {
        self.data_source().snapshot()
    }
}
