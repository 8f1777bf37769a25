//! HTTP API module for the room availability engine.
//!
//! This module provides the JSON endpoints for room status, period
//! availability, free-room search and the weekly matrix.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FreeRoomsQuery, PeriodQuery, StatusQuery};
pub use response::{
    ApiError, FreeRoomsResponse, PeriodStatusResponse, RoomsResponse, StatusResponse,
};
pub use state::AppState;
