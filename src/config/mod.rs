//! Configuration loading and management for the availability service.
//!
//! This module loads the period table and service settings from YAML
//! files. The loaded configuration is immutable for the lifetime of the
//! process.
//!
//! # Example
//!
//! ```no_run
//! use room_availability::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Configured periods: {}", config.periods().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AvailabilityConfig, PeriodEntry, PeriodsConfig, ServiceConfig};
