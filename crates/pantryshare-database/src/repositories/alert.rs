//! Persisted expiration alert repository implementation.

use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::alert::{CreateExpirationAlert, ExpirationAlert};

/// Repository for persisted expiration alerts.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    /// Create a new alert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all persisted alerts.
    pub async fn list(&self) -> AppResult<Vec<ExpirationAlert>> {
        sqlx::query_as::<_, ExpirationAlert>("SELECT * FROM expiration_alerts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list alerts", e))
    }

    /// Create a persisted alert.
    pub async fn create(&self, data: &CreateExpirationAlert) -> AppResult<ExpirationAlert> {
        sqlx::query_as::<_, ExpirationAlert>(
            "INSERT INTO expiration_alerts (food_item_id, alert_date, status) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.food_item_id)
        .bind(data.alert_date)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create alert", e))
    }
}
