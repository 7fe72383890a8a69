//! Loads `OnboardConfig` from disk.

use anyhow::{Context, Result};
use onboard_core::OnboardConfig;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the config file at `path`, or at `OnboardConfig::default_path()`
/// when no path is given.
///
/// A missing file yields the defaults. An unreadable or invalid file is an
/// error so that a typo does not silently fall back to defaults.
pub async fn load_or_default(path: Option<&Path>) -> Result<OnboardConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => OnboardConfig::default_path()?,
    };
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("[Config] No config at {:?}, using defaults", path);
            return Ok(OnboardConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config {:?}", path));
        }
    };

    let config = OnboardConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config {:?}", path))?;
    tracing::debug!("[Config] Loaded config from {:?}", path);
    Ok(config)
}
