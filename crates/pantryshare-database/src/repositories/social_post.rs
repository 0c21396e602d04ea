//! Social post repository implementation.

use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::social_post::{CreateSocialPost, SocialPost};

/// Repository for social feed posts.
#[derive(Debug, Clone)]
pub struct SocialPostRepository {
    pool: PgPool,
}

impl SocialPostRepository {
    /// Create a new social post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<SocialPost>> {
        sqlx::query_as::<_, SocialPost>("SELECT * FROM social_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// List all posts, newest first.
    pub async fn list(&self) -> AppResult<Vec<SocialPost>> {
        sqlx::query_as::<_, SocialPost>("SELECT * FROM social_posts ORDER BY post_date DESC, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// List posts related to a food item.
    pub async fn list_by_food_item(&self, food_item_id: i32) -> AppResult<Vec<SocialPost>> {
        sqlx::query_as::<_, SocialPost>(
            "SELECT * FROM social_posts WHERE food_item_id = $1 ORDER BY post_date DESC, id",
        )
        .bind(food_item_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreateSocialPost) -> AppResult<SocialPost> {
        sqlx::query_as::<_, SocialPost>(
            "INSERT INTO social_posts (platform, message, status, food_item_id) \
             VALUES ($1, $2, COALESCE($3, 'posted'), $4) RETURNING *",
        )
        .bind(&data.platform)
        .bind(&data.message)
        .bind(&data.status)
        .bind(data.food_item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Delete a post.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM social_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }
}
