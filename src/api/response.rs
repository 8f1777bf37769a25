//! Response types for the availability API.
//!
//! This module defines the JSON bodies returned by the endpoints and the
//! mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::availability::{Occupancy, PeriodStatus};
use crate::error::EngineError;
use crate::models::{Period, Room, Weekday};

/// Body of `GET /rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsResponse {
    /// Rooms in source order.
    pub rooms: Vec<Room>,
}

/// Body of `GET /rooms/:room/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The queried room.
    pub room: String,
    /// The canonical weekday the status was computed for.
    pub weekday: Weekday,
    /// The evaluated instant.
    pub at: NaiveDateTime,
    /// Whether the room is in use.
    pub status: Occupancy,
}

/// Body of `GET /rooms/:room/periods/:period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStatusResponse {
    /// The queried room.
    pub room: String,
    /// The canonical weekday, or `null` if the token was not recognized.
    pub weekday: Option<Weekday>,
    /// The resolved period.
    pub period: Period,
    /// Whether the room is reserved during the period.
    pub status: PeriodStatus,
}

/// Body of `GET /free-rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeRoomsResponse {
    /// The canonical weekday, or `null` if the token was not recognized.
    pub weekday: Option<Weekday>,
    /// The resolved period.
    pub period: Period,
    /// Free rooms in source order.
    pub rooms: Vec<Room>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::UnrecognizedWeekday { token } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNRECOGNIZED_WEEKDAY",
                    message,
                    format!("'{}' is not a weekday; use Mon..Sun or 月..日", token),
                ),
            },
            EngineError::UnknownPeriod { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_PERIOD",
                    message,
                    format!("Period {} is not in the configured period table", id),
                ),
            },
            EngineError::InvalidPeriod { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::DataSourceNotFound { .. } | EngineError::DataSourceParse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "DATA_SOURCE_ERROR",
                        "Reservation data unavailable",
                        message,
                    ),
                }
            }
        }
    }
}
