//! Identity domain module.
//!
//! The authenticated user's session-scoped record, as handed over by the
//! authentication layer once credentials have been verified.

mod model;

pub use model::Identity;
