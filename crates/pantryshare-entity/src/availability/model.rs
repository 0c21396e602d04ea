//! Availability ledger entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A ledger entry marking that an item was opted into sharing.
///
/// At most one entry exists per item (unique on `food_item_id`), and no
/// workflow ever removes one: the entry persists as a historical "this item
/// was shared at some point" flag even after the item is claimed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Availability {
    /// Unique ledger entry identifier.
    pub id: i32,
    /// The shared item (unique).
    pub food_item_id: i32,
    /// The user who shared it.
    pub owner_id: i32,
    /// When sharing started.
    pub available_from: DateTime<Utc>,
}

/// Data required to create a new availability entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailability {
    /// The item being shared.
    pub food_item_id: i32,
    /// The sharing user.
    pub owner_id: i32,
    /// When sharing starts (defaults to now).
    pub available_from: Option<DateTime<Utc>>,
}
