use crate::core::{CodesyncError, CodesyncResult};
use keyring::Entry;

/// Service name for keyring entries
const KEYRING_SERVICE: &str = "codesync";

/// Manages credential storage using OS keychain
///
/// Platform support:
/// - macOS: Keychain
/// - Windows: Credential Manager
/// - Linux: kernel keyutils
pub struct CredentialStore;

impl CredentialStore {
    fn entry(key: &str) -> CodesyncResult<Entry> {
        Entry::new(KEYRING_SERVICE, key)
            .map_err(|e| CodesyncError::Credential(format!("Failed to create keyring entry: {}", e)))
    }

    /// Store a credential in the OS keychain
    pub fn store(key: &str, value: &str) -> CodesyncResult<()> {
        Self::entry(key)?.set_password(value).map_err(|e| {
            CodesyncError::Credential(format!("Failed to store credential in keychain: {}", e))
        })
    }

    /// Retrieve a credential from the OS keychain
    ///
    /// Returns `Ok(None)` when no credential is stored under `key`.
    pub fn retrieve(key: &str) -> CodesyncResult<Option<String>> {
        match Self::entry(key)?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CodesyncError::Credential(format!(
                "Failed to retrieve credential from keychain: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyring_service_constant() {
        assert_eq!(KEYRING_SERVICE, "codesync");
    }
}
