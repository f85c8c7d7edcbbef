use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::{SessionBackend, SessionStore, SessionStoreError};

/// Environment variable allowing callers to override the session file path.
pub const SESSION_PATH_ENV: &str = "HORIZON_SESSION_PATH";
/// Default filename for the session map.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Session entries stored as a flat JSON object on disk.
///
/// The whole map is rewritten on every mutation; it only ever holds a couple
/// of short strings.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    pub fn open(path: PathBuf) -> Result<Self, SessionStoreError> {
        let entries = load_entries(&path)?;
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_locked(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries.lock().expect("session lock poisoned").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.lock().expect("session lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.save_locked(&entries)
    }

    fn erase(&self, key: &str) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.lock().expect("session lock poisoned");
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save_locked(&entries)
    }

    fn backend(&self) -> SessionBackend {
        SessionBackend::File
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>, SessionStoreError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse session file; starting signed out"
                );
                Ok(BTreeMap::new())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(error) => Err(SessionStoreError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_store::{TOKEN_KEY, USER_KEY};

    #[test]
    fn entries_persist_across_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(path.clone()).expect("open");
        store.write(TOKEN_KEY, "jwt-123").expect("write token");
        store.write(USER_KEY, r#"{"full_name":"Ada","email":"ada@example.com"}"#).expect("write user");

        let reopened = FileSessionStore::open(path).expect("reopen");
        assert_eq!(reopened.read(TOKEN_KEY).expect("read").as_deref(), Some("jwt-123"));
        assert!(reopened.read(USER_KEY).expect("read").is_some());
    }

    #[test]
    fn erase_removes_key_and_is_repeatable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(path.clone()).expect("open");
        store.write(TOKEN_KEY, "jwt-123").expect("write");

        store.erase(TOKEN_KEY).expect("first erase");
        store.erase(TOKEN_KEY).expect("second erase");
        assert_eq!(store.read(TOKEN_KEY).expect("read"), None);

        let reopened = FileSessionStore::open(path).expect("reopen");
        assert_eq!(reopened.read(TOKEN_KEY).expect("read"), None);
    }

    #[test]
    fn erase_on_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(path.clone()).expect("open");
        store.erase(USER_KEY).expect("erase");
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2").expect("write");
        let store = FileSessionStore::open(path).expect("open");
        assert_eq!(store.read(TOKEN_KEY).expect("read"), None);
    }
}
