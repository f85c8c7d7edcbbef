pub mod path_processing;
pub mod preferences;
pub mod session_store;

pub use path_processing::*;
pub use preferences::{PreferencesError, UserPreferences};
pub use session_store::{SessionBackend, SessionStore, SessionStoreError, TOKEN_KEY, USER_KEY, open_session_store};

/// Interprets common truthy spellings used in environment variables.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}
