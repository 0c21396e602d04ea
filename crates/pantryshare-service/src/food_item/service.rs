//! Food item CRUD service.

use std::sync::Arc;

use tracing::info;

use pantryshare_core::error::AppError;
use pantryshare_core::result::AppResult;
use pantryshare_database::repositories::food_item::FoodItemRepository;
use pantryshare_entity::food_item::{CreateFoodItem, FoodItem, UpdateFoodItem};

/// Manages food item creation, listing, updates, and deletion.
#[derive(Debug, Clone)]
pub struct FoodItemService {
    /// Food item repository.
    repo: Arc<FoodItemRepository>,
}

impl FoodItemService {
    /// Creates a new food item service.
    pub fn new(repo: Arc<FoodItemRepository>) -> Self {
        Self { repo }
    }

    /// List all items.
    pub async fn list(&self) -> AppResult<Vec<FoodItem>> {
        self.repo.list().await
    }

    /// Get an item by ID.
    pub async fn get(&self, id: i32) -> AppResult<FoodItem> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Food item not found"))
    }

    /// Create a new item.
    ///
    /// Category and user ids are advisory references and are not checked;
    /// the quantity must be positive.
    pub async fn create(&self, data: CreateFoodItem) -> AppResult<FoodItem> {
        validate_quantity(data.quantity)?;

        let item = self.repo.create(&data).await?;
        info!(
            food_item_id = item.id,
            user_id = item.user_id,
            "Food item created"
        );
        Ok(item)
    }

    /// Apply a partial update to an item.
    pub async fn update(&self, id: i32, changes: UpdateFoodItem) -> AppResult<FoodItem> {
        let mut item = self.get(id).await?;

        if let Some(name) = changes.name {
            item.name = name;
        }
        if let Some(quantity) = changes.quantity {
            validate_quantity(quantity)?;
            item.quantity = quantity;
        }
        if let Some(expiration_date) = changes.expiration_date {
            item.expiration_date = expiration_date;
        }
        if let Some(status) = changes.status {
            item.status = status;
        }
        if let Some(category_id) = changes.category_id {
            item.category_id = category_id;
        }

        self.repo.update(&item).await
    }

    /// Delete an item.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Food item not found"));
        }
        info!(food_item_id = id, "Food item deleted");
        Ok(())
    }
}

fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::validation("Quantity must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
