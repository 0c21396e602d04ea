//! Food item entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::FoodStatus;

/// A perishable food item tracked by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodItem {
    /// Unique item identifier.
    pub id: i32,
    /// Item name.
    pub name: String,
    /// Quantity (positive integer).
    pub quantity: i32,
    /// Expiration date.
    pub expiration_date: NaiveDate,
    /// Current lifecycle state.
    pub status: FoodStatus,
    /// Owning user id (advisory reference).
    pub user_id: i32,
    /// Category id (advisory reference).
    pub category_id: i32,
}

/// Data required to create a new food item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodItem {
    /// Item name.
    pub name: String,
    /// Quantity.
    pub quantity: i32,
    /// Expiration date.
    pub expiration_date: NaiveDate,
    /// Initial status.
    #[serde(default)]
    pub status: FoodStatus,
    /// Owning user id.
    pub user_id: i32,
    /// Category id.
    pub category_id: i32,
}

/// Partial update for a food item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFoodItem {
    /// New name.
    pub name: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New expiration date.
    pub expiration_date: Option<NaiveDate>,
    /// New status.
    pub status: Option<FoodStatus>,
    /// New category id.
    pub category_id: Option<i32>,
}
