//! Push notification domain module.
//!
//! # Module Structure
//!
//! - `platform`: runtime platform detection (`PlatformCapability`)
//! - `command`: sequenced commands sent to the push service
//! - `service`: the `PushService` collaborator trait
//! - `native`: raw events delivered by the native push plugin

mod command;
mod native;
mod platform;
mod service;

pub use command::{PushCommand, PushCommandKind, PushPayload};
pub use native::{NativeEventKind, NativePushEvent};
pub use platform::{Platform, PlatformCapability};
pub use service::{NotificationPermission, PushService};
