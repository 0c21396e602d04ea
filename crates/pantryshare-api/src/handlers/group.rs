//! Friend group handlers: list/create, the per-user overview, and the
//! member detail view.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::CreateFriendGroupRequest;
use crate::dto::wire::{FriendGroupWire, GroupDetailsWire, GroupOverviewWire};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/friendgroups
pub async fn list_groups(State(state): State<AppState>) -> ApiResult<Json<Vec<FriendGroupWire>>> {
    let groups = state.group_service.list().await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// POST /api/friendgroups — create a group, optionally inviting users.
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateFriendGroupRequest>,
) -> ApiResult<(StatusCode, Json<FriendGroupWire>)> {
    super::validate(&req)?;
    let invites = req.invites.clone();
    let group = state.group_service.create_group(req.into(), invites).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

/// GET /api/friendgroups/overview/{user_id} — the three-section
/// classification for a viewing user.
pub async fn group_overview(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<GroupOverviewWire>> {
    let overview = state.group_service.overview(user_id).await?;
    Ok(Json(overview.into()))
}

/// GET /api/friendgroups/{id}/details — members and the shared item pool.
pub async fn group_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<GroupDetailsWire>> {
    let details = state.group_service.details(id).await?;
    Ok(Json(details.into()))
}
