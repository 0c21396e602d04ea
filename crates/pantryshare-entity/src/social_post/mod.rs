//! Social post domain entities.

pub mod model;

pub use model::{CreateSocialPost, SocialPost};
