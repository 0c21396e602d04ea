//! Persisted expiration alert entity model.
//!
//! These records are the durable, audit-oriented side of alerting, created
//! idempotently by the sync routine. The user-facing alert list is a
//! separate ephemeral derivation that never reads or writes these rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read state of a persisted alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "alert_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Raised and not yet read.
    Active,
    /// Seen by the user.
    Read,
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A persisted record of an expiration warning already raised for an item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExpirationAlert {
    /// Unique alert identifier.
    pub id: i32,
    /// The item the alert refers to.
    pub food_item_id: i32,
    /// The date the alert is about (the item's expiration date).
    pub alert_date: NaiveDate,
    /// Read state.
    pub status: AlertStatus,
}

/// Data required to create a new persisted alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpirationAlert {
    /// The item the alert refers to.
    pub food_item_id: i32,
    /// The date the alert is about.
    pub alert_date: NaiveDate,
    /// Initial read state.
    #[serde(default)]
    pub status: AlertStatus,
}
