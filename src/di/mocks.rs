//! Mock implementations of service traits for testing

use super::traits::{
    ConfigProvider, LocalEnvironment, PackageRuntime, RemoteStore, SecretStore, StateStore,
    UserPrompt,
};
use crate::core::{CodesyncError, CodesyncResult, EditorVariant, Platform};
use crate::local::EnvironmentInfo;
use crate::package::Extension;
use crate::sync::{RemoteHandle, SyncPayload};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock configuration provider for testing
///
/// Defaults to a zero settle delay so installer tests don't sleep.
#[derive(Clone)]
pub struct MockConfigProvider {
    pub github_api_url: String,
    pub editor: EditorVariant,
    pub editor_cli: Option<PathBuf>,
    pub install_settle_delay: Duration,
    pub pin_versions: bool,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            github_api_url: "http://127.0.0.1:1".to_string(),
            editor: EditorVariant::Code,
            editor_cli: None,
            install_settle_delay: Duration::ZERO,
            pin_versions: false,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
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
        self.install_settle_delay
    }

    fn pin_versions(&self) -> bool {
        self.pin_versions
    }
}

/// Mock editor installation
///
/// Holds the installed extension list in memory; the settings file lives
/// wherever `settings_path` points (usually a temp dir).
#[derive(Clone)]
pub struct MockLocalEnvironment {
    installed: Arc<Mutex<Vec<Extension>>>,
    settings_path: PathBuf,
    environment: EnvironmentInfo,
}

impl MockLocalEnvironment {
    pub fn new() -> Self {
        Self::with_settings_path(PathBuf::from("/tmp/codesync-test/User/settings.json"))
    }

    pub fn with_settings_path(settings_path: PathBuf) -> Self {
        Self {
            installed: Arc::new(Mutex::new(Vec::new())),
            settings_path,
            environment: EnvironmentInfo::detect(Platform::Linux, EditorVariant::Code),
        }
    }

    pub fn add_installed(&self, extension: Extension) {
        self.installed.lock().unwrap().push(extension);
    }

    pub fn installed(&self) -> Vec<Extension> {
        self.installed.lock().unwrap().clone()
    }
}

impl Default for MockLocalEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalEnvironment for MockLocalEnvironment {
    fn environment_info(&self) -> EnvironmentInfo {
        self.environment.clone()
    }

    fn settings_path(&self) -> CodesyncResult<PathBuf> {
        Ok(self.settings_path.clone())
    }

    async fn installed_packages(&self) -> CodesyncResult<Vec<Extension>> {
        Ok(self.installed())
    }
}

/// Mock install mechanism
///
/// A successful install adds the extension to the linked `MockLocalEnvironment`
/// unless the id was registered with `never_appears`.
#[derive(Clone)]
pub struct MockPackageRuntime {
    installed: Arc<Mutex<Vec<Extension>>>,
    calls: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    silent: Arc<Mutex<HashSet<String>>>,
}

impl MockPackageRuntime {
    pub fn linked_to(local: &MockLocalEnvironment) -> Self {
        Self {
            installed: local.installed.clone(),
            calls: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
            silent: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make the install command itself fail for `id`
    pub fn fail_install(&self, id: &str) {
        self.failing.lock().unwrap().insert(id.to_ascii_lowercase());
    }

    /// Report success for `id` but never list it as installed
    pub fn never_appears(&self, id: &str) {
        self.silent.lock().unwrap().insert(id.to_ascii_lowercase());
    }

    /// Install specs received, in order
    pub fn install_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageRuntime for MockPackageRuntime {
    async fn install(&self, spec: &str) -> CodesyncResult<()> {
        self.calls.lock().unwrap().push(spec.to_string());

        let (id, version) = spec.split_once('@').unwrap_or((spec, ""));
        let key = id.to_ascii_lowercase();

        if self.failing.lock().unwrap().contains(&key) {
            return Err(CodesyncError::EditorCli(format!(
                "Failed installing extensions: {}",
                id
            )));
        }
        if !self.silent.lock().unwrap().contains(&key) {
            self.installed
                .lock()
                .unwrap()
                .push(Extension::new(id, version));
        }
        Ok(())
    }
}

/// Mock remote store
///
/// Keeps blobs in memory and counts every call.
#[derive(Clone, Default)]
pub struct MockRemoteStore {
    blobs: Arc<Mutex<HashMap<RemoteHandle, SyncPayload>>>,
    created: Arc<Mutex<Vec<SyncPayload>>>,
    updates: Arc<Mutex<Vec<(RemoteHandle, SyncPayload)>>>,
    fetches: Arc<Mutex<Vec<RemoteHandle>>>,
    fetch_error: Arc<Mutex<Option<fn() -> CodesyncError>>>,
}

impl MockRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a blob
    pub fn insert(&self, handle: RemoteHandle, payload: SyncPayload) {
        self.blobs.lock().unwrap().insert(handle, payload);
    }

    /// Make every fetch fail with the error built by `make`
    pub fn fail_fetch_with(&self, make: fn() -> CodesyncError) {
        *self.fetch_error.lock().unwrap() = Some(make);
    }

    pub fn blob(&self, handle: &RemoteHandle) -> Option<SyncPayload> {
        self.blobs.lock().unwrap().get(handle).cloned()
    }

    pub fn created(&self) -> Vec<SyncPayload> {
        self.created.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(RemoteHandle, SyncPayload)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl RemoteStore for MockRemoteStore {
    async fn create(&self, payload: &SyncPayload) -> CodesyncResult<RemoteHandle> {
        let mut created = self.created.lock().unwrap();
        created.push(payload.clone());
        let handle = RemoteHandle::new(format!("mockgist{}", created.len()));
        self.blobs
            .lock()
            .unwrap()
            .insert(handle.clone(), payload.clone());
        Ok(handle)
    }

    async fn fetch(&self, handle: &RemoteHandle) -> CodesyncResult<SyncPayload> {
        self.fetches.lock().unwrap().push(handle.clone());
        if let Some(make) = *self.fetch_error.lock().unwrap() {
            return Err(make());
        }
        self.blob(handle)
            .ok_or_else(|| CodesyncError::RemoteNotFound(handle.to_string()))
    }

    async fn update(&self, handle: &RemoteHandle, payload: &SyncPayload) -> CodesyncResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((handle.clone(), payload.clone()));
        let mut blobs = self.blobs.lock().unwrap();
        match blobs.get_mut(handle) {
            Some(blob) => {
                *blob = payload.clone();
                Ok(())
            }
            None => Err(CodesyncError::RemoteNotFound(handle.to_string())),
        }
    }
}

/// Mock secret store backed by a map
#[derive(Clone, Default)]
pub struct MockSecretStore {
    secrets: Arc<Mutex<HashMap<String, String>>>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.lock().unwrap().is_empty()
    }
}

impl SecretStore for MockSecretStore {
    fn get(&self, key: &str) -> CodesyncResult<Option<String>> {
        Ok(self.secrets.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CodesyncResult<()> {
        self.secrets
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Mock durable state
#[derive(Clone, Default)]
pub struct MockStateStore {
    handle: Arc<Mutex<Option<RemoteHandle>>>,
}

impl MockStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle(handle: RemoteHandle) -> Self {
        Self {
            handle: Arc::new(Mutex::new(Some(handle))),
        }
    }
}

impl StateStore for MockStateStore {
    fn remote_handle(&self) -> CodesyncResult<Option<RemoteHandle>> {
        Ok(self.handle.lock().unwrap().clone())
    }

    fn set_remote_handle(&self, handle: &RemoteHandle) -> CodesyncResult<()> {
        *self.handle.lock().unwrap() = Some(handle.clone());
        Ok(())
    }
}

/// Scripted user answers
///
/// Each prompt kind pops the next queued answer. An empty queue behaves like
/// the user dismissing the prompt.
#[derive(Clone, Default)]
pub struct MockPrompt {
    selections: Arc<Mutex<VecDeque<Option<usize>>>>,
    confirmations: Arc<Mutex<VecDeque<bool>>>,
    secrets: Arc<Mutex<VecDeque<Option<String>>>>,
    messages: Arc<Mutex<Vec<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl MockPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_select(&self, choice: Option<usize>) -> &Self {
        self.selections.lock().unwrap().push_back(choice);
        self
    }

    pub fn answer_confirm(&self, yes: bool) -> &Self {
        self.confirmations.lock().unwrap().push_back(yes);
        self
    }

    pub fn answer_secret(&self, secret: Option<&str>) -> &Self {
        self.secrets
            .lock()
            .unwrap()
            .push_back(secret.map(str::to_string));
        self
    }

    /// Messages shown through `info`/`warn`
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Prompt texts shown, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl UserPrompt for MockPrompt {
    fn select(&self, prompt: &str, _items: &[String]) -> CodesyncResult<Option<usize>> {
        self.asked.lock().unwrap().push(prompt.to_string());
        Ok(self.selections.lock().unwrap().pop_front().flatten())
    }

    fn confirm(&self, prompt: &str) -> CodesyncResult<bool> {
        self.asked.lock().unwrap().push(prompt.to_string());
        Ok(self.confirmations.lock().unwrap().pop_front().unwrap_or(false))
    }

    fn secret(&self, prompt: &str) -> CodesyncResult<Option<String>> {
        self.asked.lock().unwrap().push(prompt.to_string());
        Ok(self.secrets.lock().unwrap().pop_front().flatten())
    }

    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
