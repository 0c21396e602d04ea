//! Food item CRUD and mark-available handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateFoodItemRequest, MarkAvailableRequest, UpdateFoodItemRequest};
use crate::dto::wire::{AvailabilityWire, FoodItemWire};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/fooditems
pub async fn list_food_items(State(state): State<AppState>) -> ApiResult<Json<Vec<FoodItemWire>>> {
    let items = state.food_item_service.list().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// POST /api/fooditems
pub async fn create_food_item(
    State(state): State<AppState>,
    Json(req): Json<CreateFoodItemRequest>,
) -> ApiResult<(StatusCode, Json<FoodItemWire>)> {
    super::validate(&req)?;
    let item = state.food_item_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// GET /api/fooditems/{id}
pub async fn get_food_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<FoodItemWire>> {
    let item = state.food_item_service.get(id).await?;
    Ok(Json(item.into()))
}

/// PUT /api/fooditems/{id}
pub async fn update_food_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateFoodItemRequest>,
) -> ApiResult<Json<FoodItemWire>> {
    let item = state.food_item_service.update(id, req.into()).await?;
    Ok(Json(item.into()))
}

/// DELETE /api/fooditems/{id}
pub async fn delete_food_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    state.food_item_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

/// POST /api/fooditems/{id}/available — the mark-available workflow.
pub async fn mark_available(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<MarkAvailableRequest>,
) -> ApiResult<Json<AvailabilityWire>> {
    let entry = state
        .availability_service
        .mark_available(id, req.owner_id)
        .await?;
    Ok(Json(entry.into()))
}
