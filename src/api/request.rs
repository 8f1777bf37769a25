//! Request types for the availability API.
//!
//! This module defines the query-string structures accepted by the
//! endpoints. Weekdays arrive as free text and are normalized by the
//! handlers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::PeriodId;

/// Query for `GET /rooms/:room/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
    /// The instant to evaluate; the local clock is read when absent.
    #[serde(default)]
    pub at: Option<NaiveDateTime>,
    /// Overrides the weekday derived from `at`.
    #[serde(default)]
    pub weekday: Option<String>,
}

/// Query for `GET /rooms/:room/periods/:period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The weekday token.
    pub weekday: String,
}

/// Query for `GET /free-rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeRoomsQuery {
    /// The weekday token.
    pub weekday: String,
    /// The period identifier.
    pub period: PeriodId,
}
