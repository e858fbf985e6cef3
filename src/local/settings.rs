//! Reading and writing the editor's `settings.json`.

use crate::core::path::ensure_dir;
use crate::core::{CodesyncError, CodesyncResult};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Parsed settings: a JSON object, key order preserved.
pub type Settings = Map<String, Value>;

/// Read the settings file.
///
/// A missing or blank file yields an empty map. Content that is not a JSON
/// object fails with `MalformedConfig`. The containing directory is created
/// as a side effect.
pub fn read_settings(path: &Path) -> CodesyncResult<Settings> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file missing, using empty settings");
            return Ok(Settings::new());
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Settings::new());
    }

    let value: Value =
        serde_json::from_str(&content).map_err(|e| CodesyncError::MalformedConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CodesyncError::MalformedConfig {
            path: path.to_path_buf(),
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// Write settings as indented JSON, replacing the file.
pub fn write_settings(path: &Path, settings: &Settings) -> CodesyncResult<()> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }

    let mut content = serde_json::to_string_pretty(settings)?;
    content.push('\n');
    fs::write(path, content)?;

    debug!(path = %path.display(), keys = settings.len(), "wrote settings");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
