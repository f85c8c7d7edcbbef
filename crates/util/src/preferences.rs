//! User preference persistence for the Horizon portal.
//!
//! A tiny JSON-backed store that records the preferred theme and the route the
//! shell opens on. The file lives in the standard configuration directory
//! (`~/.config/horizon/preferences.json` on most platforms) and is safe to
//! read/write from multiple threads thanks to the internal `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config_file_path;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "HORIZON_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected for the TUI.
    pub preferred_theme: Option<String>,
    /// Route the shell opens on when no `--route` flag is given.
    pub start_route: Option<String>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Load the store from the default location (or `HORIZON_PREFERENCES_PATH`).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(config_file_path(PREFERENCES_PATH_ENV, PREFERENCES_FILE_NAME))
    }

    /// Load the store from an explicit path.
    pub fn at_path(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    /// Returns the saved start route, if any.
    pub fn start_route(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").start_route.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    /// Persist a new start route.
    pub fn set_start_route(&self, route: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.start_route = route)
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        apply(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let prefs = UserPreferences::at_path(dir.path().join("preferences.json")).expect("load");
        assert_eq!(prefs.preferred_theme(), None);
        assert_eq!(prefs.start_route(), None);
    }

    #[test]
    fn saved_values_survive_reload() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = UserPreferences::at_path(path.clone()).expect("load");
        prefs.set_preferred_theme(Some("horizon".into())).expect("save theme");
        prefs.set_start_route(Some("/events".into())).expect("save route");

        let reloaded = UserPreferences::at_path(path).expect("reload");
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("horizon"));
        assert_eq!(reloaded.start_route().as_deref(), Some("/events"));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").expect("write");
        let prefs = UserPreferences::at_path(path).expect("load");
        assert_eq!(prefs.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_start_route(Some("/about".into())).expect("in-memory update");
        assert_eq!(prefs.start_route().as_deref(), Some("/about"));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn env_override_selects_preferences_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("custom.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(path.to_string_lossy().as_ref()), || {
            let prefs = UserPreferences::new().expect("load");
            assert_eq!(prefs.path(), path.as_path());
        });
    }
}
