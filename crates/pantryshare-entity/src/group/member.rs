//! Group membership entity model and invitation states.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Invitation lifecycle state of a membership.
///
/// Rows created before the invitation system carry no status (`NULL`);
/// classification treats those legacy rows as accepted members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Invited, awaiting a response.
    Invited,
    /// Invitation accepted.
    Accepted,
    /// Invitation declined.
    Declined,
}

impl MembershipStatus {
    /// Whether the invitation is still open for a response.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Invited)
    }
}

/// Role of a user within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Full member.
    Member,
    /// Invitee who has not accepted yet.
    Invited,
}

impl Default for MemberRole {
    fn default() -> Self {
        Self::Member
    }
}

/// Association between a group and a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupMember {
    /// Unique membership identifier.
    pub id: i32,
    /// The group.
    pub group_id: i32,
    /// The associated user.
    pub user_id: i32,
    /// Food tag shown to other members.
    pub food_tag: Option<String>,
    /// Invitation state; `None` marks a legacy (pre-invitation) row.
    pub status: Option<MembershipStatus>,
    /// Role within the group.
    pub role: MemberRole,
}

/// Data required to create a new membership row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupMember {
    /// The group.
    pub group_id: i32,
    /// The user to associate.
    pub user_id: i32,
    /// Food tag.
    pub food_tag: Option<String>,
    /// Invitation state (`None` creates a legacy-style direct member).
    pub status: Option<MembershipStatus>,
    /// Role within the group.
    #[serde(default)]
    pub role: MemberRole,
}
