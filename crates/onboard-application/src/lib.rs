//! Application layer for Onboard.
//!
//! Coordinates the collaborators defined in `onboard-core` into the session
//! activation sequence, media upload and push identity binding.

pub mod avatar;
pub mod notification_router;
pub mod push_identity;
pub mod session;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use avatar::AvatarResolver;
pub use notification_router::NotificationRouter;
pub use push_identity::{Dispatch, PushIdentityManager};
pub use session::{Activation, ActivationState, SessionActivator, SessionContext};
pub use upload::UploadCoordinator;
