//! Social post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post to the social feed, optionally linked to a food item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocialPost {
    /// Unique post identifier.
    pub id: i32,
    /// Target platform label.
    pub platform: String,
    /// Post body.
    pub message: String,
    /// When the post was made.
    pub post_date: DateTime<Utc>,
    /// Post status (free-form; defaults to "posted").
    pub status: String,
    /// Related food item, if any.
    pub food_item_id: Option<i32>,
}

/// Data required to create a new social post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSocialPost {
    /// Target platform label.
    pub platform: String,
    /// Post body.
    pub message: String,
    /// Post status.
    pub status: Option<String>,
    /// Related food item, if any.
    pub food_item_id: Option<i32>,
}
