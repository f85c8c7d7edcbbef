use std::collections::HashMap;
use std::sync::Mutex;

use super::{SessionBackend, SessionStore, SessionStoreError};

/// Process-local session entries.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Store seeded with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries.lock().expect("session lock poisoned").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries
            .lock()
            .expect("session lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), SessionStoreError> {
        self.entries.lock().expect("session lock poisoned").remove(key);
        Ok(())
    }

    fn backend(&self) -> SessionBackend {
        SessionBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entries_are_readable_and_erasable() {
        let store = MemorySessionStore::with_entries([("token", "t"), ("user", "{}")]);
        assert_eq!(store.read("token").expect("read").as_deref(), Some("t"));
        store.erase("token").expect("erase");
        store.erase("token").expect("erase again");
        assert_eq!(store.read("token").expect("read"), None);
        assert_eq!(store.read("user").expect("read").as_deref(), Some("{}"));
    }
}
