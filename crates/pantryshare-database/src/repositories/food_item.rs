//! Food item repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::food_item::{CreateFoodItem, FoodItem, FoodStatus};

/// Repository for food item CRUD and status operations.
#[derive(Debug, Clone)]
pub struct FoodItemRepository {
    pool: PgPool,
}

impl FoodItemRepository {
    /// Create a new food item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an item by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find food item", e))
    }

    /// List all items.
    pub async fn list(&self) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list food items", e))
    }

    /// List items owned by a user.
    pub async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list food items", e))
    }

    /// List items with a given status.
    pub async fn list_by_status(&self, status: FoodStatus) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items WHERE status = $1 ORDER BY id")
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list food items", e))
    }

    /// List items expiring between two dates (inclusive).
    pub async fn list_expiring_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>(
            "SELECT * FROM food_items WHERE expiration_date BETWEEN $1 AND $2 \
             ORDER BY expiration_date, id",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list expiring items", e))
    }

    /// Create a new item.
    pub async fn create(&self, data: &CreateFoodItem) -> AppResult<FoodItem> {
        sqlx::query_as::<_, FoodItem>(
            "INSERT INTO food_items (name, quantity, expiration_date, status, user_id, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.quantity)
        .bind(data.expiration_date)
        .bind(data.status)
        .bind(data.user_id)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "food item"))
    }

    /// Update an item row (all mutable columns).
    pub async fn update(&self, item: &FoodItem) -> AppResult<FoodItem> {
        sqlx::query_as::<_, FoodItem>(
            "UPDATE food_items SET name = $2, quantity = $3, expiration_date = $4, \
             status = $5, user_id = $6, category_id = $7 WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.expiration_date)
        .bind(item.status)
        .bind(item.user_id)
        .bind(item.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update food item", e))
    }

    /// Delete an item.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM food_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete food item", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
