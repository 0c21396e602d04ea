//! Group membership handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pantryshare_core::error::AppError;
use pantryshare_entity::group::MembershipStatus;

use crate::dto::request::{CreateGroupMemberRequest, UpdateGroupMemberRequest};
use crate::dto::wire::GroupMemberWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/groupmembers
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<GroupMemberWire>>> {
    let members = state.group_member_repo.list().await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// GET /api/groupmembers/byGroup/{group_id}
pub async fn members_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> ApiResult<Json<Vec<GroupMemberWire>>> {
    let members = state.group_member_repo.list_by_group(group_id).await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// GET /api/groupmembers/byUser/{user_id}
pub async fn members_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<GroupMemberWire>>> {
    let members = state.group_member_repo.list_by_user(user_id).await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// GET /api/groupmembers/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<GroupMemberWire>> {
    let member = state
        .group_member_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Group member not found"))?;
    Ok(Json(member.into()))
}

/// POST /api/groupmembers — invite a user (or add one directly when no
/// status is given).
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupMemberRequest>,
) -> ApiResult<(StatusCode, Json<GroupMemberWire>)> {
    let member = match req.status {
        Some(MembershipStatus::Invited) => {
            state
                .group_service
                .invite(req.group_id, req.user_id, req.food_tag)
                .await?
        }
        _ => state.group_member_repo.create(&req.into()).await?,
    };
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// PUT /api/groupmembers/{id}
///
/// A status of `accepted` or `declined` answers the invitation; without a
/// status, only the food tag is updated.
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateGroupMemberRequest>,
) -> ApiResult<Json<GroupMemberWire>> {
    let member = match req.status {
        Some(MembershipStatus::Accepted) => state.group_service.respond(id, true).await?,
        Some(MembershipStatus::Declined) => state.group_service.respond(id, false).await?,
        Some(MembershipStatus::Invited) => {
            return Err(AppError::validation("Status must be accepted or declined").into());
        }
        None => {
            state
                .group_member_repo
                .update_food_tag(id, req.food_tag)
                .await?
        }
    };
    Ok(Json(member.into()))
}

/// DELETE /api/groupmembers/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.group_member_repo.delete(id).await? {
        return Err(AppError::not_found("Group member not found").into());
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
