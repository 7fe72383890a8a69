//! Session activation.
//!
//! `SessionContext` holds the current identity and session-scoped state;
//! `SessionActivator` is its only writer and drives the activation sequence.

mod activator;
mod context;

pub use activator::{Activation, SessionActivator};
pub use context::{ActivationState, SessionContext};
