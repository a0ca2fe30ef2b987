//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use super::dto::{HealthResponse, TrainSchedule, SCHEDULE_ADDED};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let healthy = services::health_check(state.repository.as_ref()).await?;
    let schedules = services::count_schedules(state.repository.as_ref()).await?;
    let status = if healthy { "ok" } else { "degraded" };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schedules,
    }))
}

// =============================================================================
// Schedule Registry
// =============================================================================

/// POST /api/schedule/add
///
/// Append a schedule to the registry and answer with a plain-text
/// confirmation. Payloads that do not deserialize into a schedule are
/// rejected before anything is stored.
pub async fn add_schedule(
    State(state): State<AppState>,
    payload: Result<Json<TrainSchedule>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(schedule) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "Rejected schedule payload: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    services::add_schedule(state.repository.as_ref(), schedule, state.validation).await?;
    Ok(SCHEDULE_ADDED)
}

/// GET /api/schedule/all
///
/// Every schedule in insertion order.
pub async fn list_schedules(State(state): State<AppState>) -> HandlerResult<Vec<TrainSchedule>> {
    let schedules = services::list_schedules(state.repository.as_ref()).await?;
    Ok(Json(schedules))
}

/// GET /api/schedule/overloaded
///
/// Schedules whose booked seats reach 90% of capacity, in insertion order.
pub async fn list_overloaded(State(state): State<AppState>) -> HandlerResult<Vec<TrainSchedule>> {
    let overloaded = services::list_overloaded(state.repository.as_ref()).await?;
    Ok(Json(overloaded))
}
