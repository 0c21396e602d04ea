//! Group membership repository implementation.

use sqlx::PgPool;

use pantryshare_core::error::{AppError, ErrorKind};
use pantryshare_core::result::AppResult;
use pantryshare_entity::group::{CreateGroupMember, GroupMember, MemberRole, MembershipStatus};

/// Repository for group membership rows and the invitation-response CAS.
#[derive(Debug, Clone)]
pub struct GroupMemberRepository {
    pool: PgPool,
}

impl GroupMemberRepository {
    /// Create a new group member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a membership row by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<GroupMember>> {
        sqlx::query_as::<_, GroupMember>("SELECT * FROM group_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group member", e)
            })
    }

    /// List all membership rows.
    pub async fn list(&self) -> AppResult<Vec<GroupMember>> {
        sqlx::query_as::<_, GroupMember>("SELECT * FROM group_members ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list group members", e)
            })
    }

    /// List membership rows for a group.
    pub async fn list_by_group(&self, group_id: i32) -> AppResult<Vec<GroupMember>> {
        sqlx::query_as::<_, GroupMember>(
            "SELECT * FROM group_members WHERE group_id = $1 ORDER BY id",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list group members", e))
    }

    /// List membership rows for a user.
    pub async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<GroupMember>> {
        sqlx::query_as::<_, GroupMember>(
            "SELECT * FROM group_members WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list group members", e))
    }

    /// Create a membership row.
    pub async fn create(&self, data: &CreateGroupMember) -> AppResult<GroupMember> {
        sqlx::query_as::<_, GroupMember>(
            "INSERT INTO group_members (group_id, user_id, food_tag, status, role) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.group_id)
        .bind(data.user_id)
        .bind(&data.food_tag)
        .bind(data.status)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::map_insert_err(e, "group member"))
    }

    /// Respond to an invitation: compare-and-swap `invited` to the given
    /// status, updating the role alongside. Returns `None` when the row is
    /// not currently invited (already responded, or a legacy member).
    pub async fn respond(
        &self,
        member_id: i32,
        status: MembershipStatus,
        role: MemberRole,
    ) -> AppResult<Option<GroupMember>> {
        sqlx::query_as::<_, GroupMember>(
            "UPDATE group_members SET status = $2, role = $3 \
             WHERE id = $1 AND status = $4 RETURNING *",
        )
        .bind(member_id)
        .bind(status)
        .bind(role)
        .bind(MembershipStatus::Invited)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update invitation", e)
        })
    }

    /// Update a membership row (food tag only; status changes go through
    /// [`Self::respond`]).
    pub async fn update_food_tag(
        &self,
        member_id: i32,
        food_tag: Option<String>,
    ) -> AppResult<GroupMember> {
        sqlx::query_as::<_, GroupMember>(
            "UPDATE group_members SET food_tag = $2 WHERE id = $1 RETURNING *",
        )
        .bind(member_id)
        .bind(food_tag)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update group member", e)
        })
    }

    /// Delete a membership row.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM group_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete group member", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
