use crate::core::path::{config_file, ensure_dir};
use crate::core::{CodesyncError, CodesyncResult, EditorVariant};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `github_api_url`
pub const API_URL_ENV: &str = "CODESYNC_GITHUB_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Editor whose settings are synced ("code" or "cursor")
    #[serde(default)]
    pub editor: EditorVariant,

    /// Explicit path to the editor CLI launcher. Looked up on PATH when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_cli: Option<PathBuf>,

    /// Wait after each extension install before checking it is listed
    #[serde(default = "default_install_settle_ms")]
    pub install_settle_ms: u64,

    /// Install the exact synced version (`id@version`) instead of the latest
    #[serde(default)]
    pub pin_versions: bool,
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_install_settle_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            editor: EditorVariant::default(),
            editor_cli: None,
            install_settle_ms: default_install_settle_ms(),
            pin_versions: false,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, creating a default one if missing
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\codesync\config.yaml
    /// - Linux: ~/.config/codesync/config.yaml
    /// - macOS: ~/Library/Application Support/codesync/config.yaml
    pub fn load() -> CodesyncResult<Self> {
        let mut config = Self::load_from(&config_file()?)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> CodesyncResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| CodesyncError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> CodesyncResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| CodesyncError::Path("Invalid config path".to_string()))?;
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| CodesyncError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.github_api_url = url.trim().to_string();
            }
        }
    }
}

impl ConfigProvider for Config {
    fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    fn editor(&self) -> EditorVariant {
        self.editor
    }

    fn editor_cli(&self) -> Option<&Path> {
        self.editor_cli.as_deref()
    }

    fn install_settle_delay(&self) -> Duration {
        Duration::from_millis(self.install_settle_ms)
    }

    fn pin_versions(&self) -> bool {
        self.pin_versions
    }
}
