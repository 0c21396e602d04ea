//! Social feed handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pantryshare_core::error::AppError;

use crate::dto::request::CreateSocialPostRequest;
use crate::dto::wire::SocialPostWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/socialposts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<SocialPostWire>>> {
    let posts = state.social_post_repo.list().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/socialposts/byFoodItem/{food_item_id}
pub async fn posts_by_food_item(
    State(state): State<AppState>,
    Path(food_item_id): Path<i32>,
) -> ApiResult<Json<Vec<SocialPostWire>>> {
    let posts = state
        .social_post_repo
        .list_by_food_item(food_item_id)
        .await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/socialposts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SocialPostWire>> {
    let post = state
        .social_post_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Social post not found"))?;
    Ok(Json(post.into()))
}

/// POST /api/socialposts
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreateSocialPostRequest>,
) -> ApiResult<(StatusCode, Json<SocialPostWire>)> {
    super::validate(&req)?;
    let post = state.social_post_repo.create(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

/// DELETE /api/socialposts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.social_post_repo.delete(id).await? {
        return Err(AppError::not_found("Social post not found").into());
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
