//! Domain layer for Onboard.
//!
//! Holds the models shared by every crate and the collaborator traits the
//! application layer consumes: media storage, preferences, platform
//! detection, the push service and the internal event bus.

pub mod config;
pub mod error;
pub mod event;
pub mod identity;
pub mod media;
pub mod preference;
pub mod push;

pub use config::OnboardConfig;
pub use error::OnboardError;
pub use identity::Identity;
