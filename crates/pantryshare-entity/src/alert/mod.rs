//! Expiration alert entities.

pub mod model;

pub use model::{AlertStatus, CreateExpirationAlert, ExpirationAlert};
