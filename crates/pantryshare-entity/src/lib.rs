//! # pantryshare-entity
//!
//! Domain entity models for PantryShare. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod alert;
pub mod availability;
pub mod category;
pub mod claim;
pub mod food_item;
pub mod group;
pub mod social_post;
pub mod user;
