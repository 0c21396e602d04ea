//! Availability ledger service.

use std::sync::Arc;

use tracing::info;

use pantryshare_core::error::AppError;
use pantryshare_core::result::AppResult;
use pantryshare_database::repositories::availability::AvailabilityRepository;
use pantryshare_entity::availability::{Availability, CreateAvailability};

/// Manages the availability ledger and the mark-available workflow.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Availability repository.
    repo: Arc<AvailabilityRepository>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(repo: Arc<AvailabilityRepository>) -> Self {
        Self { repo }
    }

    /// List all ledger entries.
    pub async fn list(&self) -> AppResult<Vec<Availability>> {
        self.repo.list().await
    }

    /// Get a ledger entry by ID.
    pub async fn get(&self, id: i32) -> AppResult<Availability> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Availability not found"))
    }

    /// Mark an item as available for sharing.
    ///
    /// Creates the ledger entry if absent and forces the item status to
    /// `disponibil`. Repeating the call is a no-op on the ledger and keeps
    /// the original `available_from`. There is no reverse operation:
    /// availability, once granted, is never revoked, even after the item is
    /// claimed.
    pub async fn mark_available(&self, food_item_id: i32, owner_id: i32) -> AppResult<Availability> {
        let entry = self.repo.mark_available(food_item_id, owner_id, None).await?;
        info!(food_item_id, owner_id, "Item marked available");
        Ok(entry)
    }

    /// Create a ledger entry directly (the manual endpoint). A second entry
    /// for the same item reports a conflict.
    pub async fn create(&self, data: CreateAvailability) -> AppResult<Availability> {
        self.repo.create(&data).await
    }

    /// Delete a ledger entry. No workflow calls this.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Availability not found"));
        }
        Ok(())
    }
}
