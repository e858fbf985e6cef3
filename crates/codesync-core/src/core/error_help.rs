use crate::core::error::CodesyncError;

/// Actionable hints attached to errors when they reach the command line.
pub trait ErrorHelp {
    fn help(&self) -> Option<&'static str>;
}

impl ErrorHelp for CodesyncError {
    fn help(&self) -> Option<&'static str> {
        match self {
            CodesyncError::RemoteAuth(_) => Some(
                "Run `codesync configure` to store a GitHub token with the `gist` scope, \
                 or set GITHUB_TOKEN.",
            ),
            CodesyncError::RemoteNotFound(_) => Some(
                "The linked gist no longer exists. Link another one with `codesync link <gist-id>`.",
            ),
            CodesyncError::RemoteTransport(_) => {
                Some("Check your network connection and try again.")
            }
            CodesyncError::MalformedConfig { .. } => {
                Some("Fix the JSON syntax in your settings file (comments are not supported).")
            }
            CodesyncError::PayloadParse(_) => Some(
                "The gist content was not written by codesync. Push from a machine with valid settings.",
            ),
            CodesyncError::EditorCli(_) => Some(
                "Make sure the editor's command-line launcher (`code` or `cursor`) is on PATH, \
                 or set `editor_cli` in the codesync config.",
            ),
            CodesyncError::UnsupportedPlatform(_) => {
                Some("codesync supports Windows, macOS, and Linux.")
            }
            _ => None,
        }
    }
}

/// Render an error followed by its help hint, if any.
pub fn format_error_with_help(error: &CodesyncError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\nhelp: {}", error, help),
        None => format!("Error: {}", error),
    }
}
