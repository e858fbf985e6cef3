//! The editor's command-line launcher as the host for extension operations.

use crate::core::{CodesyncError, CodesyncResult, EditorVariant, Platform};
use crate::di::traits::{LocalEnvironment, PackageRuntime};
use crate::local::EnvironmentInfo;
use crate::package::{dedupe, Extension};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Drives `code` / `cursor` to list and install extensions.
pub struct EditorCli {
    binary: PathBuf,
    variant: EditorVariant,
    platform: Platform,
    settings_path: PathBuf,
}

impl EditorCli {
    /// Create a handle for `variant`.
    ///
    /// Without an explicit `binary`, the launcher is looked up on PATH. A
    /// launcher that cannot be found only fails once it is actually invoked.
    pub fn new(
        variant: EditorVariant,
        platform: Platform,
        binary: Option<PathBuf>,
        settings_path: PathBuf,
    ) -> Self {
        let binary = binary.unwrap_or_else(|| {
            which::which(variant.cli_name()).unwrap_or_else(|_| PathBuf::from(variant.cli_name()))
        });
        debug!(binary = %binary.display(), "using editor CLI");

        Self {
            binary,
            variant,
            platform,
            settings_path,
        }
    }

    async fn run(&self, args: &[&str]) -> CodesyncResult<String> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                CodesyncError::EditorCli(format!(
                    "Failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CodesyncError::EditorCli(format!(
                "{} {} exited with {}: {}",
                self.binary.display(),
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse `--list-extensions --show-versions` output (`publisher.name@version` per line).
pub fn parse_extension_list(output: &str) -> Vec<Extension> {
    dedupe(
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line.rsplit_once('@') {
                Some((id, version)) => Extension::new(id, version),
                None => Extension::new(line, ""),
            }),
    )
}

#[async_trait]
impl LocalEnvironment for EditorCli {
    fn environment_info(&self) -> EnvironmentInfo {
        EnvironmentInfo::detect(self.platform, self.variant)
    }

    fn settings_path(&self) -> CodesyncResult<PathBuf> {
        Ok(self.settings_path.clone())
    }

    async fn installed_packages(&self) -> CodesyncResult<Vec<Extension>> {
        let output = self
            .run(&["--list-extensions", "--show-versions"])
            .await?;
        Ok(parse_extension_list(&output))
    }
}

#[async_trait]
impl PackageRuntime for EditorCli {
    async fn install(&self, spec: &str) -> CodesyncResult<()> {
        self.run(&["--install-extension", spec]).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extension_list() {
        let output = "ms-python.python@2024.2.1\nrust-lang.rust-analyzer@0.3.1850\n\n";
        let extensions = parse_extension_list(output);
        assert_eq!(
            extensions,
            vec![
                Extension::new("ms-python.python", "2024.2.1"),
                Extension::new("rust-lang.rust-analyzer", "0.3.1850"),
            ]
        );
    }

    #[test]
    fn test_parse_extension_list_without_versions() {
        let extensions = parse_extension_list("esbenp.prettier-vscode\r\n");
        assert_eq!(extensions, vec![Extension::new("esbenp.prettier-vscode", "")]);
    }

    #[test]
    fn test_parse_extension_list_dedupes() {
        let extensions = parse_extension_list("Pub.Ext@1.0\npub.ext@1.0\n");
        assert_eq!(extensions.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_binary_is_editor_cli_error() {
        let cli = EditorCli::new(
            EditorVariant::Code,
            Platform::Linux,
            Some(PathBuf::from("/nonexistent/codesync-test/code")),
            PathBuf::from("/tmp/settings.json"),
        );

        let err = cli.installed_packages().await.unwrap_err();
        assert!(matches!(err, CodesyncError::EditorCli(_)));
    }

    #[test]
    fn test_environment_info_uses_variant() {
        let cli = EditorCli::new(
            EditorVariant::Cursor,
            Platform::Windows,
            Some(PathBuf::from("cursor")),
            PathBuf::from("settings.json"),
        );
        let info = cli.environment_info();
        assert!(info.is_alt_editor);
        assert_eq!(info.platform, Platform::Windows);
    }
}
