use std::path::PathBuf;
use thiserror::Error;

pub type CodesyncResult<T> = Result<T, CodesyncError>;

#[derive(Error, Debug)]
pub enum CodesyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The settings file exists but does not hold a JSON object.
    #[error("Malformed settings file {}: {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    #[error("Authentication failed: {0}")]
    RemoteAuth(String),

    #[error("Remote request failed: {0}")]
    RemoteTransport(String),

    #[error("Gist not found: {0}")]
    RemoteNotFound(String),

    #[error("Invalid sync payload: {0}")]
    PayloadParse(String),

    /// Per-extension failure. Collected by the installer, never fatal for a batch.
    #[error("Extension {id} could not be verified after install: {reason}")]
    InstallVerification { id: String, reason: String },

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Editor CLI error: {0}")]
    EditorCli(String),
}
