//! Transient notifications.

mod state;
mod toasts_component;

pub use state::{MAX_VISIBLE_TOASTS, TOAST_LIFETIME_SECS, Toast, ToastState};
pub use toasts_component::ToastsComponent;
