//! Resource handlers.
//!
//! Plain-CRUD resources (users, categories, social posts) talk to their
//! repositories directly; resources with workflow semantics (items,
//! availability, alerts, claims, groups) go through the service layer.

pub mod alert;
pub mod availability;
pub mod category;
pub mod claim;
pub mod food_item;
pub mod group;
pub mod group_member;
pub mod health;
pub mod social_post;
pub mod user;

use pantryshare_core::error::AppError;

use crate::error::ApiError;

/// Run validator-derived checks, collapsing failures into the single
/// generic validation message.
pub(crate) fn validate<T: validator::Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|_| ApiError::from(AppError::validation("Invalid request body")))
}
