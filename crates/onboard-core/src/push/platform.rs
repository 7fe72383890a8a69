//! Platform capability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime the client is executing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
    /// Browser or desktop shell; push is unavailable.
    Other,
}

impl Platform {
    pub fn is_mobile(self) -> bool {
        matches!(self, Platform::Android | Platform::Ios)
    }

    /// The push tag identifying this platform, if it is a mobile one.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Platform::Android => Some("android"),
            Platform::Ios => Some("ios"),
            Platform::Other => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
            Platform::Other => write!(f, "other"),
        }
    }
}

/// Answers which runtime the client is on.
///
/// Implementations only need to report [`Platform`]; the predicates are
/// derived from it so android and ios can never both be true.
pub trait PlatformCapability: Send + Sync {
    fn platform(&self) -> Platform;

    fn is_mobile(&self) -> bool {
        self.platform().is_mobile()
    }

    fn is_android(&self) -> bool {
        self.platform() == Platform::Android
    }

    fn is_ios(&self) -> bool {
        self.platform() == Platform::Ios
    }
}
