//! Capability traits consumed by the sync core
//!
//! Everything the reconciler and installer touch outside of pure data goes
//! through one of these, so tests can substitute in-memory fakes.

use crate::core::{CodesyncResult, EditorVariant};
use crate::local::EnvironmentInfo;
use crate::package::Extension;
use crate::sync::{RemoteHandle, SyncPayload};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
pub trait ConfigProvider: Send + Sync {
    /// GitHub REST API base URL
    fn github_api_url(&self) -> &str;

    /// Editor variant whose settings are synced
    fn editor(&self) -> EditorVariant;

    /// Explicit editor CLI path, if configured
    fn editor_cli(&self) -> Option<&Path>;

    /// Wait between triggering an install and verifying it
    fn install_settle_delay(&self) -> Duration;

    /// Whether installs request the exact synced version
    fn pin_versions(&self) -> bool;
}

/// The editor installation on this machine: where its settings live, what is
/// installed, and what the running environment looks like.
#[async_trait]
pub trait LocalEnvironment: Send + Sync {
    /// Description of the running editor/OS, embedded in every payload
    fn environment_info(&self) -> EnvironmentInfo;

    /// Location of the user settings file
    fn settings_path(&self) -> CodesyncResult<PathBuf>;

    /// Currently installed, non-built-in extensions
    async fn installed_packages(&self) -> CodesyncResult<Vec<Extension>>;
}

/// Mechanism that installs one extension.
///
/// Completion of the returned future does not guarantee the editor lists the
/// extension yet; callers verify separately.
#[async_trait]
pub trait PackageRuntime: Send + Sync {
    async fn install(&self, spec: &str) -> CodesyncResult<()>;
}

/// Remote versioned blob holding one `SyncPayload`
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Create a new private blob and return its handle
    async fn create(&self, payload: &SyncPayload) -> CodesyncResult<RemoteHandle>;

    /// Fetch and parse the blob
    async fn fetch(&self, handle: &RemoteHandle) -> CodesyncResult<SyncPayload>;

    /// Overwrite the blob's content
    async fn update(&self, handle: &RemoteHandle, payload: &SyncPayload) -> CodesyncResult<()>;
}

/// Secret storage owned by the host (OS keychain in production)
pub trait SecretStore: Send + Sync {
    fn get(&self, key: &str) -> CodesyncResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CodesyncResult<()>;
}

/// Durable key-value state: the remote handle this installation syncs with
pub trait StateStore: Send + Sync {
    fn remote_handle(&self) -> CodesyncResult<Option<RemoteHandle>>;

    fn set_remote_handle(&self, handle: &RemoteHandle) -> CodesyncResult<()>;
}

/// User interaction.
///
/// `Ok(None)` from `select`/`secret` means the user dismissed the prompt.
pub trait UserPrompt: Send + Sync {
    /// Pick one of `items`
    fn select(&self, prompt: &str, items: &[String]) -> CodesyncResult<Option<usize>>;

    /// Yes/no question. Dismissal counts as "no".
    fn confirm(&self, prompt: &str) -> CodesyncResult<bool>;

    /// Masked text input
    fn secret(&self, prompt: &str) -> CodesyncResult<Option<String>>;

    /// Informational message
    fn info(&self, message: &str);

    /// Warning or validation message
    fn warn(&self, message: &str);
}
