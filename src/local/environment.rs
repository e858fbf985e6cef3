use crate::core::{EditorVariant, Platform};
use serde::{Deserialize, Serialize};

/// Description of the machine a payload was produced on.
///
/// Derived from the running process each time a payload is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub is_alt_editor: bool,
    pub platform: Platform,
    pub architecture: String,
    pub app_name: String,
    pub app_host: String,
}

impl EnvironmentInfo {
    /// Describe this process for the given editor variant
    pub fn detect(platform: Platform, variant: EditorVariant) -> Self {
        Self {
            is_alt_editor: variant.is_alt_editor(),
            platform,
            architecture: std::env::consts::ARCH.to_string(),
            app_name: variant.app_name().to_string(),
            app_host: "desktop".to_string(),
        }
    }
}
