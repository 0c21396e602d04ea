//! Availability ledger handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::CreateAvailabilityRequest;
use crate::dto::wire::AvailabilityWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/availability
pub async fn list_availability(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AvailabilityWire>>> {
    let entries = state.availability_service.list().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// POST /api/availability
pub async fn create_availability(
    State(state): State<AppState>,
    Json(req): Json<CreateAvailabilityRequest>,
) -> ApiResult<(StatusCode, Json<AvailabilityWire>)> {
    let entry = state.availability_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// GET /api/availability/{id}
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<AvailabilityWire>> {
    let entry = state.availability_service.get(id).await?;
    Ok(Json(entry.into()))
}

/// DELETE /api/availability/{id}
pub async fn delete_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    state.availability_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
