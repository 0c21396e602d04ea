//! Category CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pantryshare_core::error::AppError;

use crate::dto::request::CreateCategoryRequest;
use crate::dto::wire::CategoryWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryWire>>> {
    let categories = state.category_repo.list().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryWire>)> {
    super::validate(&req)?;
    let category = state.category_repo.create(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CategoryWire>> {
    let category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    Ok(Json(category.into()))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.category_repo.delete(id).await? {
        return Err(AppError::not_found("Category not found").into());
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
