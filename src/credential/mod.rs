//! GitHub token handling: the `configure` flow and token lookup for syncs.

use crate::core::{CodesyncError, CodesyncResult, CredentialStore};
use crate::di::{SecretStore, UserPrompt};
use tracing::{debug, info};

/// Keychain key the token is stored under
pub const TOKEN_KEY: &str = "github_token";

/// Environment variable that overrides the stored token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Shortest token accepted from the prompt
pub const MIN_TOKEN_LEN: usize = 40;

/// `SecretStore` backed by the OS keychain
pub struct KeyringSecretStore;

impl SecretStore for KeyringSecretStore {
    fn get(&self, key: &str) -> CodesyncResult<Option<String>> {
        CredentialStore::retrieve(key)
    }

    fn set(&self, key: &str, value: &str) -> CodesyncResult<()> {
        CredentialStore::store(key, value)
    }
}

/// Result of the `configure` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Stored,
    /// Input failed validation; the message was shown to the user
    Rejected(String),
    Cancelled,
}

impl ConfigureOutcome {
    /// Turn a rejected token into an error so the command exits non-zero
    pub fn ensure_accepted(self) -> CodesyncResult<Self> {
        match self {
            ConfigureOutcome::Rejected(message) => Err(CodesyncError::Credential(format!(
                "token rejected, nothing was stored: {}",
                message
            ))),
            outcome => Ok(outcome),
        }
    }
}

/// Check a token typed by the user, returning it trimmed.
pub fn validate_token(input: &str) -> Result<&str, String> {
    let token = input.trim();
    if token.chars().count() < MIN_TOKEN_LEN {
        return Err(format!(
            "A GitHub token is at least {} characters long; got {}.",
            MIN_TOKEN_LEN,
            token.chars().count()
        ));
    }
    Ok(token)
}

/// Ask for a token and store it if it passes validation.
///
/// Nothing is stored when the prompt is dismissed or the input is rejected.
pub fn configure(
    prompt: &dyn UserPrompt,
    secrets: &dyn SecretStore,
) -> CodesyncResult<ConfigureOutcome> {
    let input = match prompt.secret("GitHub personal access token (gist scope)")? {
        Some(input) => input,
        None => return Ok(ConfigureOutcome::Cancelled),
    };

    let token = match validate_token(&input) {
        Ok(token) => token,
        Err(message) => {
            prompt.warn(&message);
            return Ok(ConfigureOutcome::Rejected(message));
        }
    };

    secrets.set(TOKEN_KEY, token)?;
    info!("stored GitHub token");
    prompt.info("Token stored in the system keychain.");
    Ok(ConfigureOutcome::Stored)
}

/// Where `resolve_token` would find a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    Keychain,
    Missing,
}

pub fn token_source(secrets: &dyn SecretStore) -> CodesyncResult<TokenSource> {
    if env_token().is_some() {
        return Ok(TokenSource::Environment);
    }
    Ok(match secrets.get(TOKEN_KEY)? {
        Some(_) => TokenSource::Keychain,
        None => TokenSource::Missing,
    })
}

fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Token for the gist client: `GITHUB_TOKEN` if set, otherwise the stored one.
pub fn resolve_token(secrets: &dyn SecretStore) -> CodesyncResult<Option<String>> {
    if let Some(token) = env_token() {
        debug!("using token from {}", TOKEN_ENV);
        return Ok(Some(token));
    }
    secrets.get(TOKEN_KEY)
}
