//! Claim domain entities.

pub mod model;

pub use model::{Claim, ClaimStatus, CreateClaim};
