//! Host platform and editor variant.

use crate::core::error::{CodesyncError, CodesyncResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating systems codesync knows how to resolve settings paths for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    /// Resolve the platform of the running process.
    pub fn current() -> CodesyncResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value onto a supported platform.
    pub fn from_os(os: &str) -> CodesyncResult<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(CodesyncError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

/// Which editor build the settings belong to.
///
/// `Code` is the primary editor; `Cursor` is the alternate variant that keeps its
/// user data under a different folder name and ships its own CLI launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorVariant {
    #[default]
    Code,
    Cursor,
}

impl EditorVariant {
    /// Folder under the platform app-data root holding `User/settings.json`
    pub fn app_folder(&self) -> &'static str {
        match self {
            EditorVariant::Code => "Code",
            EditorVariant::Cursor => "Cursor",
        }
    }

    pub fn app_name(&self) -> &'static str {
        match self {
            EditorVariant::Code => "Visual Studio Code",
            EditorVariant::Cursor => "Cursor",
        }
    }

    /// Name of the command-line launcher on PATH
    pub fn cli_name(&self) -> &'static str {
        match self {
            EditorVariant::Code => "code",
            EditorVariant::Cursor => "cursor",
        }
    }

    pub fn is_alt_editor(&self) -> bool {
        matches!(self, EditorVariant::Cursor)
    }
}

impl fmt::Display for EditorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for EditorVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" | "vscode" => Ok(EditorVariant::Code),
            "cursor" => Ok(EditorVariant::Cursor),
            other => Err(format!(
                "unknown editor '{}' (expected 'code' or 'cursor')",
                other
            )),
        }
    }
}
