//! Key/value persistence for session credentials.
//!
//! The portal keeps two entries per signed-in member: the bearer token under
//! [`TOKEN_KEY`] and the serialized member record under [`USER_KEY`]. Where
//! they live depends on the configured backend:
//!
//! - `keychain`: the OS keychain via `keyring-rs` (default)
//! - `file`: a JSON map in the config directory
//! - `memory`: process-local, nothing survives exit
//!
//! Erasing a key that is not present is always `Ok(())`, so logout can run any
//! number of times.

use std::fmt::Debug;
use std::str::FromStr;

use thiserror::Error;

mod file;
mod keychain;
mod memory;

pub use file::{FileSessionStore, SESSION_FILE_NAME, SESSION_PATH_ENV};
pub use keychain::KeychainSessionStore;
pub use memory::MemorySessionStore;

use crate::config_file_path;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON member record.
pub const USER_KEY: &str = "user";
/// Environment variable used to select the session backend.
pub const SESSION_BACKEND_ENV_VAR: &str = "HORIZON_SESSION_BACKEND";

/// Errors raised by session store backends.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Keyring error for {key}: {error}")]
    Keyring { key: String, error: String },

    #[error("session file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown session backend: {0}")]
    UnknownBackend(String),
}

/// Where session entries are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionBackend {
    #[default]
    Keychain,
    File,
    Memory,
}

impl SessionBackend {
    /// Reads the backend from `HORIZON_SESSION_BACKEND`, defaulting to the keychain.
    pub fn from_env() -> Self {
        std::env::var(SESSION_BACKEND_ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionBackend::Keychain => "keychain",
            SessionBackend::File => "file",
            SessionBackend::Memory => "memory",
        }
    }
}

impl FromStr for SessionBackend {
    type Err = SessionStoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "keychain" | "keyring" => Ok(Self::Keychain),
            "file" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(SessionStoreError::UnknownBackend(other.to_string())),
        }
    }
}

/// Named key/value storage for session credentials.
pub trait SessionStore: Send + Sync + Debug {
    /// Reads a value; `Ok(None)` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Writes or replaces a value.
    fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Removes a value. Absent keys are not an error.
    fn erase(&self, key: &str) -> Result<(), SessionStoreError>;

    /// The backend this store persists to.
    fn backend(&self) -> SessionBackend;
}

/// Opens the store for `backend`.
pub fn open_session_store(backend: SessionBackend) -> Result<Box<dyn SessionStore>, SessionStoreError> {
    let store: Box<dyn SessionStore> = match backend {
        SessionBackend::Keychain => Box::new(KeychainSessionStore::new()),
        SessionBackend::File => Box::new(FileSessionStore::open(config_file_path(SESSION_PATH_ENV, SESSION_FILE_NAME))?),
        SessionBackend::Memory => Box::new(MemorySessionStore::default()),
    };
    tracing::debug!(backend = backend.as_str(), "Opened session store");
    Ok(store)
}
