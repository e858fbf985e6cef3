//! Editor extensions and the installer that brings a machine in line with a
//! synced extension list.

pub mod installer;

pub use installer::{InstallReport, PackageInstaller};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An editor extension as listed by the editor and as stored in a sync payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// `publisher.name`
    pub id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Extension {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            enabled: true,
        }
    }

    /// Identity used for comparisons. The editor treats ids case-insensitively.
    pub fn normalized_id(&self) -> String {
        self.id.trim().to_ascii_lowercase()
    }

    /// Argument passed to `--install-extension`
    pub fn install_spec(&self, pin_version: bool) -> String {
        if pin_version && !self.version.is_empty() {
            format!("{}@{}", self.id, self.version)
        } else {
            self.id.clone()
        }
    }
}

/// Drop blank ids and later duplicates, keeping first-seen order.
pub fn dedupe(extensions: impl IntoIterator<Item = Extension>) -> Vec<Extension> {
    let mut seen = HashSet::new();
    extensions
        .into_iter()
        .filter(|ext| !ext.normalized_id().is_empty())
        .filter(|ext| seen.insert(ext.normalized_id()))
        .collect()
}
