use tracing::debug;

use super::{SessionBackend, SessionStore, SessionStoreError};

static SERVICE: &str = "horizon";

/// Session entries stored in the OS keychain, one credential per key.
#[derive(Debug, Clone)]
pub struct KeychainSessionStore {
    service: String,
}

impl KeychainSessionStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, SessionStoreError> {
        keyring::Entry::new(&self.service, key).map_err(|e| keyring_error(key, e))
    }
}

impl Default for KeychainSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for KeychainSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(keyring_error(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entry(key)?.set_password(value).map_err(|e| keyring_error(key, e))?;
        debug!("Stored session entry in keychain: {}", key);
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), SessionStoreError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => {
                debug!("Removed session entry from keychain: {}", key);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(keyring_error(key, e)),
        }
    }

    fn backend(&self) -> SessionBackend {
        SessionBackend::Keychain
    }
}

fn keyring_error(key: &str, error: keyring::Error) -> SessionStoreError {
    SessionStoreError::Keyring {
        key: key.to_string(),
        error: error.to_string(),
    }
}
