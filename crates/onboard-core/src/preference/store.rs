use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Key/value preference storage persisted on the device.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the raw stored value, `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
