//! Expiration alert derivations.
//!
//! Two deliberately independent computations share this module:
//!
//! - [`display`]: the ephemeral, recomputed-on-read list shown to a user.
//!   A 7-day window, item status ignored.
//! - [`sync`]: the persisted, audit-oriented records. A 3-day window,
//!   claimed items excluded, created idempotently.
//!
//! Merging them would change observable behavior — the display list does
//! not apply the sync path's window or its `claimed` exclusion.

pub mod display;
pub mod service;
pub mod sync;

pub use display::{DisplayAlert, compute_display_alerts, days_until_expiration};
pub use service::AlertService;
pub use sync::SyncReport;
