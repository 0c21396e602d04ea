//! Availability ledger service.

pub mod service;

pub use service::AvailabilityService;
