//! Install the extensions a machine is missing

use crate::core::{CodesyncError, CodesyncResult};
use crate::di::traits::{LocalEnvironment, PackageRuntime};
use crate::package::Extension;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Outcome of `PackageInstaller::install_missing`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallReport {
    /// Every desired extension was already installed; nothing was attempted
    NoOpAllPresent,
    Attempted {
        installed_count: usize,
        failed_ids: Vec<String>,
    },
}

impl InstallReport {
    pub fn installed_count(&self) -> usize {
        match self {
            InstallReport::NoOpAllPresent => 0,
            InstallReport::Attempted {
                installed_count, ..
            } => *installed_count,
        }
    }

    pub fn failed_ids(&self) -> &[String] {
        match self {
            InstallReport::NoOpAllPresent => &[],
            InstallReport::Attempted { failed_ids, .. } => failed_ids,
        }
    }

    /// One-line summary for the user
    pub fn summary(&self) -> String {
        match self {
            InstallReport::NoOpAllPresent => "All extensions are already installed.".to_string(),
            InstallReport::Attempted {
                installed_count,
                failed_ids,
            } if failed_ids.is_empty() => {
                format!("Installed {} extension(s).", installed_count)
            }
            InstallReport::Attempted {
                installed_count,
                failed_ids,
            } => format!(
                "Installed {} extension(s); {} failed: {}",
                installed_count,
                failed_ids.len(),
                failed_ids.join(", ")
            ),
        }
    }
}

/// Diffs a desired extension list against what the editor reports and installs
/// the difference, one extension at a time.
///
/// The install mechanism gives no completion signal, so each install is
/// followed by a settle delay and a fresh listing to confirm the extension
/// showed up.
pub struct PackageInstaller {
    local: Arc<dyn LocalEnvironment>,
    runtime: Arc<dyn PackageRuntime>,
    settle_delay: Duration,
    pin_versions: bool,
    progress: ProgressBar,
}

impl PackageInstaller {
    pub fn new(
        local: Arc<dyn LocalEnvironment>,
        runtime: Arc<dyn PackageRuntime>,
        settle_delay: Duration,
        pin_versions: bool,
    ) -> Self {
        Self {
            local,
            runtime,
            settle_delay,
            pin_versions,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-extension progress on a terminal progress bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Install every extension in `desired` that is not installed yet.
    pub async fn install_missing(&self, desired: &[Extension]) -> CodesyncResult<InstallReport> {
        let installed = self.local.installed_packages().await?;
        let installed_ids: HashSet<String> =
            installed.iter().map(Extension::normalized_id).collect();

        let mut seen = HashSet::new();
        let to_install: Vec<&Extension> = desired
            .iter()
            .filter(|ext| !ext.normalized_id().is_empty())
            .filter(|ext| seen.insert(ext.normalized_id()))
            .filter(|ext| !installed_ids.contains(&ext.normalized_id()))
            .collect();

        info!(
            desired = ?desired.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            installed = ?installed.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            missing = ?to_install.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            "computed extension diff"
        );

        if to_install.is_empty() {
            return Ok(InstallReport::NoOpAllPresent);
        }

        self.progress.set_length(to_install.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            self.progress.set_style(style);
        }

        let mut installed_count = 0;
        let mut failed_ids = Vec::new();

        for ext in to_install {
            self.progress.set_message(ext.id.clone());
            match self.install_one(ext).await {
                Ok(()) => installed_count += 1,
                Err(e) => {
                    warn!(id = %ext.id, error = %e, "extension install failed");
                    failed_ids.push(ext.id.clone());
                }
            }
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        Ok(InstallReport::Attempted {
            installed_count,
            failed_ids,
        })
    }

    async fn install_one(&self, ext: &Extension) -> CodesyncResult<()> {
        let spec = ext.install_spec(self.pin_versions);
        debug!(%spec, "installing extension");

        self.runtime
            .install(&spec)
            .await
            .map_err(|e| CodesyncError::InstallVerification {
                id: ext.id.clone(),
                reason: e.to_string(),
            })?;

        tokio::time::sleep(self.settle_delay).await;

        let now_installed = self.local.installed_packages().await.map_err(|e| {
            CodesyncError::InstallVerification {
                id: ext.id.clone(),
                reason: format!("could not list installed extensions: {}", e),
            }
        })?;

        let wanted = ext.normalized_id();
        if now_installed.iter().any(|e| e.normalized_id() == wanted) {
            debug!(id = %ext.id, "extension verified");
            Ok(())
        } else {
            Err(CodesyncError::InstallVerification {
                id: ext.id.clone(),
                reason: "not listed by the editor after install".to_string(),
            })
        }
    }
}
