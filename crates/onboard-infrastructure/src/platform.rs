//! Static platform capability.

use onboard_core::push::{Platform, PlatformCapability};

/// Reports a platform fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform(Platform);

impl StaticPlatform {
    pub fn new(platform: Platform) -> Self {
        Self(platform)
    }

    /// Platform of the compilation target.
    pub fn detect() -> Self {
        if cfg!(target_os = "android") {
            Self(Platform::Android)
        } else if cfg!(target_os = "ios") {
            Self(Platform::Ios)
        } else {
            Self(Platform::Other)
        }
    }
}

impl PlatformCapability for StaticPlatform {
    fn platform(&self) -> Platform {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_on_host_is_not_mobile() {
        // Tests run on a desktop/CI host.
        assert!(!StaticPlatform::detect().is_mobile());
    }

    #[test]
    fn test_static_platform_reports_given_value() {
        let platform = StaticPlatform::new(Platform::Ios);
        assert!(platform.is_ios());
        assert!(platform.is_mobile());
        assert!(!platform.is_android());
    }
}
