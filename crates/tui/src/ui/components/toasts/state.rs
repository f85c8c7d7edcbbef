use std::collections::VecDeque;

use chrono::{DateTime, Duration, Local};
use horizon_types::Notification;

use crate::session::{NotificationSink, NotifyError};

/// Seconds a toast stays on screen.
pub const TOAST_LIFETIME_SECS: i64 = 4;
/// Maximum number of toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: DateTime<Local>,
}

impl Toast {
    fn is_expired(&self, now: DateTime<Local>) -> bool {
        now.signed_duration_since(self.shown_at) >= Duration::seconds(TOAST_LIFETIME_SECS)
    }
}

/// Stack of transient notifications, newest last.
#[derive(Debug, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
}

impl ToastState {
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Local::now());
    }

    pub fn push_at(&mut self, notification: Notification, shown_at: DateTime<Local>) {
        tracing::debug!(level = %notification.level, message = %notification.message, "toast");
        self.toasts.push_back(Toast { notification, shown_at });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drops expired toasts. Returns `true` if anything was removed.
    pub fn expire(&mut self, now: DateTime<Local>) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        self.toasts.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl NotificationSink for ToastState {
    fn notify(&mut self, notification: Notification) -> Result<(), NotifyError> {
        self.push(notification);
        Ok(())
    }
}
