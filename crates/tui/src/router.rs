//! Client-side route holder.
//!
//! The shell does not resolve routes to views itself; it only tracks the
//! current path and hands it to whoever renders. Components request changes
//! through `Effect::Navigate`, and the command layer applies them here.

use horizon_types::LANDING_ROUTE;
use tracing::debug;

/// Read/write access to the current route.
pub trait Router {
    /// Requests a route change.
    fn navigate(&mut self, path: &str);

    /// The current path.
    fn current_route(&self) -> &str;
}

/// In-process router state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    current: String,
}

impl RouteState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: normalize_path(&initial.into()),
        }
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new(LANDING_ROUTE)
    }
}

impl Router for RouteState {
    fn navigate(&mut self, path: &str) {
        let next = normalize_path(path);
        debug!(from = %self.current, to = %next, "navigate");
        self.current = next;
    }

    fn current_route(&self) -> &str {
        &self.current
    }
}

/// Trims whitespace, guarantees a leading `/` and drops a trailing one
/// (except for the root itself).
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return LANDING_ROUTE.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_replaces_current_route() {
        let mut router = RouteState::default();
        assert_eq!(router.current_route(), "/");
        router.navigate("/events");
        assert_eq!(router.current_route(), "/events");
    }

    #[test]
    fn paths_are_normalized() {
        assert_eq!(normalize_path("events"), "/events");
        assert_eq!(normalize_path(" /profile/ "), "/profile");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }
}
