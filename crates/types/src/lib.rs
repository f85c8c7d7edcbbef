use std::fmt;

use serde::{Deserialize, Serialize};

/// Landing route shown to signed-out visitors and after logout.
pub const LANDING_ROUTE: &str = "/";
/// Default route for a signed-in member.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Member record persisted under the `"user"` session key.
///
/// Mirrors the user payload returned by the portal backend. Only `full_name`
/// and `email` are required; everything else defaults so older payloads keep
/// deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub passout_year: Option<u16>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserRecord {
    /// Parses the JSON text stored under the `"user"` key.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// First word of the full name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or(&self.full_name)
    }
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        f.write_str(label)
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Messages that can be sent to update the application state.
///
/// This enum defines the user actions and system events that can trigger
/// state changes in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (toast expiry)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Flip the sidebar panel open/closed
    ToggleSidebar,
    /// Force the sidebar panel closed
    CloseSidebar,
    /// Request a route change
    Navigate(String),
    /// End the current session
    Logout,
}

/// Side effects that can be triggered by components.
///
/// Components never touch the router, the session store or the toast stack
/// directly; they return effects that the command layer executes in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request a client-side route change
    Navigate(String),
    /// Flip the sidebar panel
    ToggleSidebar,
    /// Close the sidebar panel
    CloseSidebar,
    /// Clear stored credentials and identity, then return to the landing route
    Logout,
    /// Push a toast
    Notify(Notification),
    /// Leave the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_accepts_backend_payload() {
        let json = r#"{
            "id": "6f1c",
            "full_name": "Test User Alumni",
            "email": "test_user@test.com",
            "passout_year": 2020,
            "current_location": "San Francisco, CA",
            "current_company": "Tech Corp",
            "domain": "Software Engineering",
            "phone": "(555) 123-4567",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let user = UserRecord::from_json(json).expect("deserialize UserRecord");
        assert_eq!(user.full_name, "Test User Alumni");
        assert_eq!(user.passout_year, Some(2020));
        assert_eq!(user.current_company.as_deref(), Some("Tech Corp"));
        assert_eq!(user.first_name(), "Test");
    }

    #[test]
    fn user_record_defaults_optional_fields() {
        let user = UserRecord::from_json(r#"{"full_name":"Ada","email":"ada@example.com"}"#).expect("minimal record");
        assert!(user.id.is_empty());
        assert_eq!(user.passout_year, None);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn user_record_rejects_missing_email() {
        assert!(UserRecord::from_json(r#"{"full_name":"Ada"}"#).is_err());
    }

    #[test]
    fn notification_level_displays_lowercase() {
        assert_eq!(NotificationLevel::Success.to_string(), "success");
        assert_eq!(Notification::warning("x").level, NotificationLevel::Warning);
    }
}
