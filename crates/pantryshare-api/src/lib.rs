//! # pantryshare-api
//!
//! HTTP layer for PantryShare: the axum router, resource handlers, shared
//! application state, and the wire DTO boundary that keeps the original
//! capitalized-word field convention at the HTTP surface while the rest of
//! the codebase uses Rust naming.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
