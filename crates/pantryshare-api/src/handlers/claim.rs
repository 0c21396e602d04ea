//! Claim workflow handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pantryshare_service::claim::UpdateClaimRequest as UpdateClaimChanges;

use crate::dto::request::{CreateClaimRequest, UpdateClaimRequest};
use crate::dto::wire::ClaimWire;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/claims
pub async fn list_claims(State(state): State<AppState>) -> ApiResult<Json<Vec<ClaimWire>>> {
    let claims = state.claim_service.list().await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// POST /api/claims — claim an item (creates the claim and flips the item
/// to `claimed`).
pub async fn create_claim(
    State(state): State<AppState>,
    Json(req): Json<CreateClaimRequest>,
) -> ApiResult<(StatusCode, Json<ClaimWire>)> {
    let claim = state.claim_service.claim(req.into()).await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// GET /api/claims/{id}
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ClaimWire>> {
    let claim = state.claim_service.get(id).await?;
    Ok(Json(claim.into()))
}

/// PUT /api/claims/{id}
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateClaimRequest>,
) -> ApiResult<Json<ClaimWire>> {
    let claim = state
        .claim_service
        .update(
            id,
            UpdateClaimChanges {
                status: req.status,
                pickup_location: req.pickup_location,
            },
        )
        .await?;
    Ok(Json(claim.into()))
}

/// POST /api/claims/{id}/accept — owner accepts; the item transfers to the
/// claimant. Owner-only by convention of the callers, as in the original
/// system.
pub async fn accept_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ClaimWire>> {
    let claim = state.claim_service.accept(id).await?;
    Ok(Json(claim.into()))
}

/// POST /api/claims/{id}/decline — owner declines; the item stays `claimed`.
pub async fn decline_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ClaimWire>> {
    let claim = state.claim_service.decline(id).await?;
    Ok(Json(claim.into()))
}
