//! Table repositories. One struct per table, SQL written by hand.

pub mod alert;
pub mod availability;
pub mod category;
pub mod claim;
pub mod food_item;
pub mod friend_group;
pub mod group_member;
pub mod social_post;
pub mod user;

use pantryshare_core::error::{AppError, ErrorKind};

/// Map an insert error, turning unique-constraint violations into conflicts.
pub(crate) fn map_insert_err(e: sqlx::Error, what: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::conflict(format!("{what} already exists"));
        }
    }
    AppError::with_source(ErrorKind::Database, format!("Failed to create {what}"), e)
}
