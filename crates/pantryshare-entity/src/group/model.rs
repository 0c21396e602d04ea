//! Friend group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A friend group. The owner is implicitly always a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FriendGroup {
    /// Unique group identifier.
    pub id: i32,
    /// Group name.
    pub name: String,
    /// Owning user id.
    pub owner_id: i32,
    /// Free-form description.
    pub description: String,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new friend group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFriendGroup {
    /// Group name.
    pub name: String,
    /// Owning user id.
    pub owner_id: i32,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}
