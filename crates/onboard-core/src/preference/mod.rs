//! Persisted user preferences.

mod flag;
mod store;

pub use flag::PreferenceFlag;
pub use store::PreferenceStore;
