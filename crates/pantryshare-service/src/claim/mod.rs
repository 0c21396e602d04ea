//! Claim workflow service.

pub mod service;

pub use service::{ClaimService, UpdateClaimRequest};
