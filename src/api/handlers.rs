//! HTTP request handlers for the availability API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::{
    WeeklyMatrix, list_free_rooms, period_status, status_at, weekly_matrix,
};
use crate::error::EngineResult;
use crate::models::{PeriodId, Weekday};

use super::request::{FreeRoomsQuery, PeriodQuery, StatusQuery};
use super::response::{
    ApiError, ApiErrorResponse, FreeRoomsResponse, PeriodStatusResponse, RoomsResponse,
    StatusResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(rooms_handler))
        .route("/rooms/:room/status", get(status_handler))
        .route("/rooms/:room/periods/:period", get(period_handler))
        .route("/rooms/:room/week", get(week_handler))
        .route("/free-rooms", get(free_rooms_handler))
        .with_state(state)
}

/// Handler for GET /rooms.
async fn rooms_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let result = state.snapshot().map(|snapshot| RoomsResponse {
        rooms: snapshot.rooms().to_vec(),
    });

    respond(correlation_id, "rooms", started, result)
}

/// Handler for GET /rooms/:room/status.
async fn status_handler(
    State(state): State<AppState>,
    Path(room): Path<String>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return reject(correlation_id, rejection.body_text()),
    };

    let result = compute_status(&state, room, query, correlation_id);
    respond(correlation_id, "status", started, result)
}

/// Computes the point-in-time status of a room.
///
/// Without `at` the local clock is read here; the engine itself only ever
/// receives the instant as a parameter.
fn compute_status(
    state: &AppState,
    room: String,
    query: StatusQuery,
    correlation_id: Uuid,
) -> EngineResult<StatusResponse> {
    let at = query.at.unwrap_or_else(|| Local::now().naive_local());
    let weekday = match query.weekday.as_deref() {
        Some(token) => Weekday::parse(token)?,
        None => Weekday::from_clock(at)?,
    };

    let snapshot = state.snapshot()?;
    let status = status_at(snapshot.index(), &room, weekday, at);

    info!(
        correlation_id = %correlation_id,
        room = %room,
        weekday = %weekday,
        at = %at,
        status = %status,
        "Computed room status"
    );

    Ok(StatusResponse {
        room,
        weekday,
        at,
        status,
    })
}

/// Handler for GET /rooms/:room/periods/:period.
async fn period_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, PeriodId)>, PathRejection>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let (room, period) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => return reject(correlation_id, rejection.body_text()),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return reject(correlation_id, rejection.body_text()),
    };

    let result = compute_period_status(&state, room, period, query);
    respond(correlation_id, "period", started, result)
}

/// Tests one room against one period on the requested weekday.
///
/// An unrecognized weekday matches no reservations and reads as free.
fn compute_period_status(
    state: &AppState,
    room: String,
    period: PeriodId,
    query: PeriodQuery,
) -> EngineResult<PeriodStatusResponse> {
    let period = *state.config().get_period(period)?;
    let weekday = Weekday::parse(&query.weekday).ok();

    let snapshot = state.snapshot()?;
    let intervals: &[_] = match weekday {
        Some(weekday) => snapshot.index().intervals(&room, weekday),
        None => &[],
    };
    let status = period_status(intervals, &period);

    Ok(PeriodStatusResponse {
        room,
        weekday,
        period,
        status,
    })
}

/// Handler for GET /free-rooms.
async fn free_rooms_handler(
    State(state): State<AppState>,
    query: Result<Query<FreeRoomsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return reject(correlation_id, rejection.body_text()),
    };

    let result = compute_free_rooms(&state, query, correlation_id);
    respond(correlation_id, "free_rooms", started, result)
}

/// Enumerates the free rooms for a weekday and period.
///
/// An unrecognized weekday is user input, not a failure: nothing matches
/// it, so every room is reported free.
fn compute_free_rooms(
    state: &AppState,
    query: FreeRoomsQuery,
    correlation_id: Uuid,
) -> EngineResult<FreeRoomsResponse> {
    let period = *state.config().get_period(query.period)?;

    let weekday = Weekday::parse(&query.weekday).ok();
    if weekday.is_none() {
        warn!(
            correlation_id = %correlation_id,
            weekday = %query.weekday,
            "Unrecognized weekday; no reservations will match"
        );
    }

    let snapshot = state.snapshot()?;
    let free = list_free_rooms(
        snapshot.index(),
        state.config().periods(),
        snapshot.rooms(),
        &query.weekday,
        query.period,
    )?;

    info!(
        correlation_id = %correlation_id,
        weekday = %query.weekday,
        period = query.period,
        total_rooms = snapshot.rooms().len(),
        free_rooms = free.len(),
        "Enumerated free rooms"
    );

    Ok(FreeRoomsResponse {
        weekday,
        period,
        rooms: free.into_iter().cloned().collect(),
    })
}

/// Handler for GET /rooms/:room/week.
async fn week_handler(State(state): State<AppState>, Path(room): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let result: EngineResult<WeeklyMatrix> = state.snapshot().map(|snapshot| {
        weekly_matrix(
            snapshot.index(),
            &room,
            state.config().periods(),
            state.config().matrix_weekdays(),
        )
    });

    respond(correlation_id, "week", started, result)
}

/// Renders an engine result as a JSON response and logs the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    started: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                duration_us = started.elapsed().as_micros(),
                "Query completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "Query failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Renders a rejected path or query string as a validation error.
fn reject(correlation_id: Uuid, message: String) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %message,
        "Rejected request parameters"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::validation_error(message)),
    )
        .into_response()
}
