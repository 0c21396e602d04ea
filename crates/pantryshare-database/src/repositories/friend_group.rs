//! Friend group repository implementation.

use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::group::{CreateFriendGroup, FriendGroup};

/// Repository for friend groups (list/create only, per the API surface).
#[derive(Debug, Clone)]
pub struct FriendGroupRepository {
    pool: PgPool,
}

impl FriendGroupRepository {
    /// Create a new friend group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<FriendGroup>> {
        sqlx::query_as::<_, FriendGroup>("SELECT * FROM friend_groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find group", e))
    }

    /// List all groups.
    pub async fn list(&self) -> AppResult<Vec<FriendGroup>> {
        sqlx::query_as::<_, FriendGroup>("SELECT * FROM friend_groups ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list groups", e))
    }

    /// Create a new group.
    pub async fn create(&self, data: &CreateFriendGroup) -> AppResult<FriendGroup> {
        sqlx::query_as::<_, FriendGroup>(
            "INSERT INTO friend_groups (name, owner_id, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.owner_id)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "friend group"))
    }
}
