//! Health check handlers.

use axum::Json;
use axum::extract::State;

use pantryshare_core::error::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                pantryshare_core::error::ErrorKind::ServiceUnavailable,
                "Database unreachable",
                e,
            )
        })?;

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
