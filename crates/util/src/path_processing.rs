use std::env;
use std::path::PathBuf;

use dirs_next::{cache_dir, config_dir, home_dir};

/// Directory name used under the platform config and cache roots.
pub const APP_DIR_NAME: &str = "horizon";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Resolves a file under `~/.config/horizon/`, honoring a non-empty
/// environment override.
pub fn config_file_path(override_env: &str, file_name: &str) -> PathBuf {
    env_override(override_env).unwrap_or_else(|| {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(file_name)
    })
}

/// Resolves a file under the platform cache directory, honoring a non-empty
/// environment override.
pub fn cache_file_path(override_env: &str, file_name: &str) -> PathBuf {
    env_override(override_env).unwrap_or_else(|| {
        cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR_NAME)
            .join(file_name)
    })
}

fn env_override(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(expand_tilde(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ENV: &str = "HORIZON_PATH_PROCESSING_TEST";

    #[test]
    fn expand_tilde_leaves_absolute_paths_alone() {
        assert_eq!(expand_tilde("/tmp/session.json"), PathBuf::from("/tmp/session.json"));
        assert_eq!(expand_tilde("  relative/file  "), PathBuf::from("relative/file"));
    }

    #[test]
    fn config_file_path_prefers_environment_override() {
        temp_env::with_var(TEST_ENV, Some("/var/tmp/custom.json"), || {
            assert_eq!(config_file_path(TEST_ENV, "ignored.json"), PathBuf::from("/var/tmp/custom.json"));
        });
    }

    #[test]
    fn blank_override_falls_back_to_config_dir() {
        temp_env::with_var(TEST_ENV, Some("   "), || {
            let path = config_file_path(TEST_ENV, "preferences.json");
            assert!(path.ends_with(PathBuf::from(APP_DIR_NAME).join("preferences.json")));
        });
    }

    #[test]
    fn cache_file_path_uses_app_dir() {
        temp_env::with_var(TEST_ENV, None::<&str>, || {
            let path = cache_file_path(TEST_ENV, "horizon.log");
            assert!(path.ends_with(PathBuf::from(APP_DIR_NAME).join("horizon.log")));
        });
    }
}
