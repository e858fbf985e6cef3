use crate::core::error::{CodesyncError, CodesyncResult};
use crate::core::platform::{EditorVariant, Platform};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the Codesync home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\codesync
/// - Linux: ~/.config/codesync
/// - macOS: ~/Library/Application Support/codesync
pub fn codesync_home() -> CodesyncResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| CodesyncError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("codesync"))
}

/// Get the config file path (`<codesync home>/config.yaml`)
pub fn config_file() -> CodesyncResult<PathBuf> {
    Ok(codesync_home()?.join("config.yaml"))
}

/// Get the durable state file path (`<codesync home>/state.yaml`)
///
/// Holds the linked gist id. Secrets never go here.
pub fn state_file() -> CodesyncResult<PathBuf> {
    Ok(codesync_home()?.join("state.yaml"))
}

/// Compute the editor's user settings file location.
///
/// Layout is `<app-data root>/<app folder>/User/settings.json` where the root is:
/// - Windows: `app_data` (the roaming APPDATA directory, required)
/// - macOS: `<home>/Library/Application Support`
/// - Linux: `app_data` when given (XDG config home), else `<home>/.config`
pub fn resolve_settings_path(
    platform: Platform,
    variant: EditorVariant,
    home: &Path,
    app_data: Option<&Path>,
) -> CodesyncResult<PathBuf> {
    let root = match platform {
        Platform::Windows => app_data
            .map(Path::to_path_buf)
            .ok_or_else(|| CodesyncError::Path("APPDATA is not set".to_string()))?,
        Platform::MacOs => home.join("Library").join("Application Support"),
        Platform::Linux => app_data
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join(".config")),
    };

    Ok(root
        .join(variant.app_folder())
        .join("User")
        .join("settings.json"))
}

/// Resolve the settings path for the running process.
pub fn settings_file(variant: EditorVariant) -> CodesyncResult<PathBuf> {
    let platform = Platform::current()?;
    let home = dirs::home_dir()
        .ok_or_else(|| CodesyncError::Path("Could not determine home directory".to_string()))?;
    let app_data = dirs::config_dir();
    resolve_settings_path(platform, variant, &home, app_data.as_deref())
}

/// Ensure a directory exists, creating it if necessary
///
/// A concurrent creator winning the race is not an error.
pub fn ensure_dir(path: &Path) -> CodesyncResult<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
