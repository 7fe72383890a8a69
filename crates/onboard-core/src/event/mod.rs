//! Internal event bus.
//!
//! A fixed set of typed topics replaces free-form string channels. Native
//! push events are normalised before they reach the bus.

mod bus;
mod model;

pub use bus::EventBus;
pub use model::{AppEvent, SessionActivatedEvent, Topic};
