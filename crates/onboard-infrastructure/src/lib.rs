//! In-process implementations of the Onboard collaborator traits.
//!
//! Network-backed collaborators (media store, push service) live with the
//! embedding application; this crate only provides what can run locally.

pub mod config_loader;
pub mod event_bus;
pub mod logging;
pub mod platform;
pub mod preference_store;

pub use crate::event_bus::BroadcastEventBus;
pub use crate::platform::StaticPlatform;
pub use crate::preference_store::InMemoryPreferenceStore;
