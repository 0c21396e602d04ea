//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// Login is a trust-all user picker; the password column exists for parity
/// with the source data model and is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Stored password.
    #[serde(skip_serializing)]
    pub password: String,
    /// Food preference tag (e.g. "vegetarian").
    pub food_preference: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password (stored as-is).
    pub password: String,
    /// Food preference tag.
    pub food_preference: Option<String>,
}

/// Partial update for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New food preference tag.
    pub food_preference: Option<Option<String>>,
}
