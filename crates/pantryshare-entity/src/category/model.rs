//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A food category. Static reference data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i32,
    /// Category name (unique).
    pub name: String,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name.
    pub name: String,
}
