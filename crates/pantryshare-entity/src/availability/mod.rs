//! Availability ledger entities.

pub mod model;

pub use model::{Availability, CreateAvailability};
