//! Expiration alert handlers: persisted CRUD, the display derivation, the
//! sync trigger, and the expiring-window query.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use crate::dto::request::CreateExpirationAlertRequest;
use crate::dto::wire::{DisplayAlertWire, ExpirationAlertWire, FoodItemWire, SyncReportWire};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/expirationalerts
pub async fn list_alerts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ExpirationAlertWire>>> {
    let alerts = state.alert_service.list_persisted().await?;
    Ok(Json(alerts.into_iter().map(Into::into).collect()))
}

/// POST /api/expirationalerts — manual alert creation.
pub async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateExpirationAlertRequest>,
) -> ApiResult<(StatusCode, Json<ExpirationAlertWire>)> {
    let data = req.into_create(Utc::now().date_naive());
    let alert = state.alert_service.create_persisted(data).await?;
    Ok((StatusCode::CREATED, Json(alert.into())))
}

/// GET /api/expirationalerts/display/{user_id}
///
/// Computes the ephemeral display list and kicks off the persisted sync in
/// the background. The sync is fire-and-forget: its failures are logged and
/// never reach this response.
pub async fn display_alerts(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<DisplayAlertWire>>> {
    let alerts = state.alert_service.display_alerts(user_id).await?;

    let alert_service = Arc::clone(&state.alert_service);
    tokio::spawn(async move {
        if let Err(e) = alert_service.sync().await {
            tracing::error!(error = %e, "Background alert sync failed");
        }
    });

    Ok(Json(alerts.into_iter().map(Into::into).collect()))
}

/// POST /api/expirationalerts/sync — run the persisted sync on demand.
pub async fn sync_alerts(State(state): State<AppState>) -> ApiResult<Json<SyncReportWire>> {
    let report = state.alert_service.sync().await?;
    Ok(Json(report.into()))
}

/// GET /api/expirationalerts/expiring/{days}
pub async fn expiring_items(
    State(state): State<AppState>,
    Path(days): Path<i64>,
) -> ApiResult<Json<Vec<FoodItemWire>>> {
    let items = state.alert_service.expiring_within(days).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
