//! Availability ledger repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::availability::{Availability, CreateAvailability};

/// Repository for the availability ledger.
#[derive(Debug, Clone)]
pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    /// Create a new availability repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a ledger entry by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Availability>> {
        sqlx::query_as::<_, Availability>("SELECT * FROM availabilities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find availability", e)
            })
    }

    /// Find the ledger entry for an item, if any.
    pub async fn find_by_item(&self, food_item_id: i32) -> AppResult<Option<Availability>> {
        sqlx::query_as::<_, Availability>("SELECT * FROM availabilities WHERE food_item_id = $1")
            .bind(food_item_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find availability", e)
            })
    }

    /// List all ledger entries.
    pub async fn list(&self) -> AppResult<Vec<Availability>> {
        sqlx::query_as::<_, Availability>("SELECT * FROM availabilities ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list availabilities", e)
            })
    }

    /// Create a ledger entry directly. Duplicate items report a conflict.
    pub async fn create(&self, data: &CreateAvailability) -> AppResult<Availability> {
        sqlx::query_as::<_, Availability>(
            "INSERT INTO availabilities (food_item_id, owner_id, available_from) \
             VALUES ($1, $2, COALESCE($3, NOW())) RETURNING *",
        )
        .bind(data.food_item_id)
        .bind(data.owner_id)
        .bind(data.available_from)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "availability"))
    }

    /// Mark an item available: insert the ledger entry if absent and force
    /// the item's status to `disponibil`, atomically.
    ///
    /// Idempotent in item status and ledger row count. Repeated calls do not
    /// move `available_from`; the unique constraint on `food_item_id`
    /// guarantees a single row even under concurrent callers.
    pub async fn mark_available(
        &self,
        food_item_id: i32,
        owner_id: i32,
        available_from: Option<DateTime<Utc>>,
    ) -> AppResult<Availability> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "INSERT INTO availabilities (food_item_id, owner_id, available_from) \
             VALUES ($1, $2, COALESCE($3, NOW())) \
             ON CONFLICT (food_item_id) DO NOTHING",
        )
        .bind(food_item_id)
        .bind(owner_id)
        .bind(available_from)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record availability", e)
        })?;

        let updated = sqlx::query("UPDATE food_items SET status = 'disponibil' WHERE id = $1")
            .bind(food_item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update item status", e)
            })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found("Food item not found"));
        }

        let entry = sqlx::query_as::<_, Availability>(
            "SELECT * FROM availabilities WHERE food_item_id = $1",
        )
        .bind(food_item_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read availability", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(entry)
    }

    /// Delete a ledger entry. No workflow calls this; the endpoint exists
    /// for the uniform CRUD shape only.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM availabilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete availability", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
