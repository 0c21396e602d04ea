//! Claim workflow: claim an available item, then let the owner accept or
//! decline.
//!
//! State machine: `pending → accepted` or `pending → rejected`, both
//! terminal. Accepting transfers the item to the claimant in place; the
//! claim flip is compare-and-swapped so a second accept reports a conflict
//! instead of silently repeating the transfer.

use std::sync::Arc;

use tracing::info;

use pantryshare_core::error::AppError;
use pantryshare_core::result::AppResult;
use pantryshare_database::repositories::claim::ClaimRepository;
use pantryshare_database::repositories::food_item::FoodItemRepository;
use pantryshare_entity::claim::{Claim, ClaimStatus, CreateClaim};

/// Request to update an existing claim (the plain CRUD path; owner
/// decisions go through [`ClaimService::accept`] / [`ClaimService::decline`]).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateClaimRequest {
    /// New status.
    pub status: Option<ClaimStatus>,
    /// New pickup location.
    pub pickup_location: Option<String>,
}

/// Manages the claim lifecycle and ownership transfer.
#[derive(Debug, Clone)]
pub struct ClaimService {
    /// Claim repository.
    claim_repo: Arc<ClaimRepository>,
    /// Food item repository.
    item_repo: Arc<FoodItemRepository>,
}

impl ClaimService {
    /// Creates a new claim service.
    pub fn new(claim_repo: Arc<ClaimRepository>, item_repo: Arc<FoodItemRepository>) -> Self {
        Self {
            claim_repo,
            item_repo,
        }
    }

    /// List all claims.
    pub async fn list(&self) -> AppResult<Vec<Claim>> {
        self.claim_repo.list().await
    }

    /// Get a claim by ID.
    pub async fn get(&self, id: i32) -> AppResult<Claim> {
        self.claim_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Claim not found"))
    }

    /// Claim an item: create a pending claim and set the item to `claimed`.
    ///
    /// The item must exist. That it is currently `disponibil` is a
    /// convention of the callers, not enforced here, and nothing prevents
    /// further claims on an already-claimed item.
    pub async fn claim(&self, data: CreateClaim) -> AppResult<Claim> {
        self.item_repo
            .find_by_id(data.food_item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Food item not found"))?;

        let claim = self.claim_repo.create_for_item(&data).await?;

        info!(
            claim_id = claim.id,
            user_id = claim.user_id,
            food_item_id = claim.food_item_id,
            "Claim created"
        );
        Ok(claim)
    }

    /// Accept a pending claim: transfer the item to the claimant and mark
    /// the claim `accepted`, atomically.
    ///
    /// The item keeps its identity — owner becomes the claimant and status
    /// resets to `normal` — so its alert and claim history stay linked. An
    /// already-resolved claim reports a conflict.
    pub async fn accept(&self, claim_id: i32) -> AppResult<Claim> {
        let claim = self.get(claim_id).await?;
        let accepted = self.claim_repo.accept_transfer(&claim).await?;

        info!(
            claim_id,
            food_item_id = claim.food_item_id,
            new_owner = claim.user_id,
            "Claim accepted, item transferred"
        );
        Ok(accepted)
    }

    /// Decline a pending claim.
    ///
    /// The item status is left at `claimed` — not reverted to `disponibil`
    /// — so a declined item stays out of the claimable pool until its owner
    /// resets it. An already-resolved claim reports a conflict.
    pub async fn decline(&self, claim_id: i32) -> AppResult<Claim> {
        self.get(claim_id).await?;
        let declined = self.claim_repo.decline(claim_id).await?;

        info!(claim_id, "Claim declined");
        Ok(declined)
    }

    /// Apply a partial update to a claim (the uniform CRUD path).
    pub async fn update(&self, claim_id: i32, changes: UpdateClaimRequest) -> AppResult<Claim> {
        let mut claim = self.get(claim_id).await?;

        if let Some(status) = changes.status {
            claim.status = status;
        }
        if let Some(pickup_location) = changes.pickup_location {
            claim.pickup_location = Some(pickup_location);
        }

        self.claim_repo.update(&claim).await
    }
}
