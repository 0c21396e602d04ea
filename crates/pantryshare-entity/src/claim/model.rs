//! Claim entity model and state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Resolution state of a claim.
///
/// `pending` is the only non-terminal state: a claim moves to `accepted`
/// or `rejected` exactly once and never transitions again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Waiting for the item owner's decision.
    Pending,
    /// The owner accepted; ownership has been transferred.
    Accepted,
    /// The owner declined.
    Rejected,
}

impl ClaimStatus {
    /// Whether the state machine permits moving from `self` to `to`.
    pub fn can_transition_to(&self, to: ClaimStatus) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A request by a user to take ownership of an available item.
///
/// Claims are never deleted; resolved claims remain as history. Nothing
/// prevents several claims (even by the same user) on one item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Claim {
    /// Unique claim identifier.
    pub id: i32,
    /// The claiming user.
    pub user_id: i32,
    /// The claimed item.
    pub food_item_id: i32,
    /// Resolution state.
    pub status: ClaimStatus,
    /// When the claim was made.
    pub claim_date: DateTime<Utc>,
    /// Agreed pickup location, if any.
    pub pickup_location: Option<String>,
}

/// Data required to create a new claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClaim {
    /// The claiming user.
    pub user_id: i32,
    /// The claimed item.
    pub food_item_id: i32,
    /// Pickup location, if already agreed.
    pub pickup_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_resolve_both_ways() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Accepted));
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Rejected));
    }

    #[test]
    fn test_resolved_claims_are_terminal() {
        for resolved in [ClaimStatus::Accepted, ClaimStatus::Rejected] {
            assert!(resolved.is_terminal());
            assert!(!resolved.can_transition_to(ClaimStatus::Accepted));
            assert!(!resolved.can_transition_to(ClaimStatus::Rejected));
            assert!(!resolved.can_transition_to(ClaimStatus::Pending));
        }
    }

    #[test]
    fn test_no_self_transition() {
        assert!(!ClaimStatus::Pending.can_transition_to(ClaimStatus::Pending));
    }
}
