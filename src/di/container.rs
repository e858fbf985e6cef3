//! Service container for dependency injection

use super::traits::{
    ConfigProvider, LocalEnvironment, PackageRuntime, RemoteStore, SecretStore, StateStore,
    UserPrompt,
};
use crate::config::Config;
use crate::core::path::settings_file;
use crate::core::{CodesyncResult, EditorVariant, Platform};
use crate::credential::{resolve_token, token_source, KeyringSecretStore, TokenSource};
use crate::github::GistClient;
use crate::local::EditorCli;
use crate::package::PackageInstaller;
use crate::state::FileStateStore;
use indicatif::ProgressBar;
use std::path::Path;
use std::sync::Arc;

/// Everything one sync invocation needs, passed explicitly instead of living
/// in process-wide globals.
///
/// Uses `Arc<dyn Trait>` so tests can swap any collaborator for a mock.
///
/// # Example (Testing)
///
/// ```
/// use codesync::di::{SyncContext, mocks::*};
/// use std::sync::Arc;
///
/// let local = MockLocalEnvironment::new();
/// let context = SyncContext::with_providers(
///     Arc::new(MockConfigProvider::default()),
///     Arc::new(MockStateStore::new()),
///     Arc::new(MockSecretStore::new()),
///     Arc::new(MockRemoteStore::new()),
///     Arc::new(local.clone()),
///     Arc::new(MockPackageRuntime::linked_to(&local)),
///     Arc::new(MockPrompt::new()),
/// );
/// assert!(context.state.remote_handle().unwrap().is_none());
/// ```
#[derive(Clone)]
pub struct SyncContext {
    pub config: Arc<dyn ConfigProvider>,
    pub state: Arc<dyn StateStore>,
    pub secrets: Arc<dyn SecretStore>,
    pub remote: Arc<dyn RemoteStore>,
    pub local: Arc<dyn LocalEnvironment>,
    pub runtime: Arc<dyn PackageRuntime>,
    pub prompt: Arc<dyn UserPrompt>,
    show_progress: bool,
}

impl SyncContext {
    /// Create a context with production implementations
    ///
    /// - Loads config from disk (`editor` overrides the configured variant)
    /// - Resolves the settings path for this platform
    /// - Drives the editor CLI for extension operations
    /// - Authenticates the gist client with `GITHUB_TOKEN` or the keychain token
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded, the platform is not
    /// supported, or the keychain cannot be read.
    pub fn new(prompt: Arc<dyn UserPrompt>, editor: Option<EditorVariant>) -> CodesyncResult<Self> {
        let mut config = Config::load()?;
        if let Some(editor) = editor {
            config.editor = editor;
        }
        let config: Arc<dyn ConfigProvider> = Arc::new(config);

        let platform = Platform::current()?;
        let editor_cli = Arc::new(EditorCli::new(
            config.editor(),
            platform,
            config.editor_cli().map(Path::to_path_buf),
            settings_file(config.editor())?,
        ));

        let secrets: Arc<dyn SecretStore> = Arc::new(KeyringSecretStore);
        let token = resolve_token(secrets.as_ref())?;
        let remote = Arc::new(GistClient::new(config.github_api_url(), token)?);

        Ok(Self {
            config,
            state: Arc::new(FileStateStore::open_default()?),
            secrets,
            remote,
            local: editor_cli.clone(),
            runtime: editor_cli,
            prompt,
            show_progress: true,
        })
    }

    /// Create a context with custom provider implementations
    ///
    /// Primarily for tests. Progress output is disabled.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        state: Arc<dyn StateStore>,
        secrets: Arc<dyn SecretStore>,
        remote: Arc<dyn RemoteStore>,
        local: Arc<dyn LocalEnvironment>,
        runtime: Arc<dyn PackageRuntime>,
        prompt: Arc<dyn UserPrompt>,
    ) -> Self {
        Self {
            config,
            state,
            secrets,
            remote,
            local,
            runtime,
            prompt,
            show_progress: false,
        }
    }

    /// Where the gist token for this context comes from, without reading it out
    pub fn token_source(&self) -> CodesyncResult<TokenSource> {
        token_source(self.secrets.as_ref())
    }

    /// Installer wired to this context's editor and config
    pub fn installer(&self) -> PackageInstaller {
        let installer = PackageInstaller::new(
            self.local.clone(),
            self.runtime.clone(),
            self.config.install_settle_delay(),
            self.config.pin_versions(),
        );
        if self.show_progress {
            installer.with_progress(ProgressBar::new(0))
        } else {
            installer
        }
    }
}
