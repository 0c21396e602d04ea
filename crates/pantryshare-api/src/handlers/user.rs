//! User CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pantryshare_core::error::AppError;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::wire::UserWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserWire>>> {
    let users = state.user_repo.list().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserWire>)> {
    super::validate(&req)?;
    let user = state.user_repo.create(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<UserWire>> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserWire>> {
    let mut user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let changes = pantryshare_entity::user::UpdateUser::from(req);
    if let Some(name) = changes.name {
        user.name = name;
    }
    if let Some(email) = changes.email {
        user.email = email;
    }
    if let Some(food_preference) = changes.food_preference {
        user.food_preference = food_preference;
    }

    let updated = state.user_repo.update(&user).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.user_repo.delete(id).await? {
        return Err(AppError::not_found("User not found").into());
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
