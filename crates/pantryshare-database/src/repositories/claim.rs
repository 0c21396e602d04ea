//! Claim repository implementation.
//!
//! The claim workflow's atomic sequences live here: claim creation flips
//! the item to `claimed` in the same transaction, and accept/decline guard
//! the status change with a compare-and-swap so resolved claims cannot be
//! resolved twice.

use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::claim::{Claim, ClaimStatus, CreateClaim};

/// Repository for claim CRUD and workflow operations.
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    /// Create a new claim repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a claim by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Claim>> {
        sqlx::query_as::<_, Claim>("SELECT * FROM claims WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find claim", e))
    }

    /// List all claims.
    pub async fn list(&self) -> AppResult<Vec<Claim>> {
        sqlx::query_as::<_, Claim>("SELECT * FROM claims ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list claims", e))
    }

    /// Create a pending claim and set the item's status to `claimed`,
    /// atomically.
    pub async fn create_for_item(&self, data: &CreateClaim) -> AppResult<Claim> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let claim = sqlx::query_as::<_, Claim>(
            "INSERT INTO claims (user_id, food_item_id, pickup_location) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.food_item_id)
        .bind(&data.pickup_location)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create claim", e))?;

        let updated = sqlx::query("UPDATE food_items SET status = 'claimed' WHERE id = $1")
            .bind(data.food_item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update item status", e)
            })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found("Food item not found"));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(claim)
    }

    /// Accept a pending claim and transfer the item to the claimant,
    /// atomically.
    ///
    /// The claim flip is a compare-and-swap on `pending`; a claim that was
    /// already resolved reports a conflict and nothing is written. The
    /// transfer is an in-place owner update resetting the item to `normal`,
    /// so the record identity and its linked history survive.
    pub async fn accept_transfer(&self, claim: &Claim) -> AppResult<Claim> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let accepted = sqlx::query_as::<_, Claim>(
            "UPDATE claims SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(claim.id)
        .bind(ClaimStatus::Accepted)
        .bind(ClaimStatus::Pending)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to accept claim", e))?
        .ok_or_else(|| AppError::conflict("Claim already resolved"))?;

        let transferred =
            sqlx::query("UPDATE food_items SET user_id = $2, status = 'normal' WHERE id = $1")
                .bind(claim.food_item_id)
                .bind(claim.user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to transfer item", e)
                })?;

        if transferred.rows_affected() == 0 {
            return Err(AppError::not_found("Food item not found"));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(accepted)
    }

    /// Decline a pending claim. The item's status is deliberately left
    /// untouched (it stays `claimed`).
    pub async fn decline(&self, claim_id: i32) -> AppResult<Claim> {
        sqlx::query_as::<_, Claim>(
            "UPDATE claims SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(claim_id)
        .bind(ClaimStatus::Rejected)
        .bind(ClaimStatus::Pending)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to decline claim", e))?
        .ok_or_else(|| AppError::conflict("Claim already resolved"))
    }

    /// Update a claim row (status and pickup location).
    pub async fn update(&self, claim: &Claim) -> AppResult<Claim> {
        sqlx::query_as::<_, Claim>(
            "UPDATE claims SET status = $2, pickup_location = $3 WHERE id = $1 RETURNING *",
        )
        .bind(claim.id)
        .bind(claim.status)
        .bind(&claim.pickup_location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update claim", e))
    }
}
