//! Session termination.
//!
//! [`logout`] clears everything that identifies the current member and sends
//! the user back to the landing route. The steps always run in the same order
//! and each one is isolated: a failure is logged, recorded in the
//! [`LogoutReport`], and the remaining steps still run. Nothing is rolled back
//! and nothing gates entry, so calling it while already signed out is fine.

use std::io::Write;

use horizon_types::{LANDING_ROUTE, Notification, UserRecord};
use horizon_util::{SessionStore, SessionStoreError, TOKEN_KEY, USER_KEY};
use thiserror::Error;
use tracing::{info, warn};

use crate::router::Router;

/// Message shown once the session has been cleared.
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Write access to the externally owned member identity.
pub trait IdentitySlot {
    fn set_identity(&mut self, identity: Option<UserRecord>);
}

impl IdentitySlot for Option<UserRecord> {
    fn set_identity(&mut self, identity: Option<UserRecord>) {
        *self = identity;
    }
}

/// Error raised by a notification sink.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification sink unavailable")]
    Unavailable,
    #[error("failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// Fire-and-forget destination for user-facing notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification) -> Result<(), NotifyError>;
}

/// Notification sink that prints to a writer, used outside the TUI.
#[derive(Debug)]
pub struct WriterNotifier<W: Write> {
    writer: W,
}

impl<W: Write> WriterNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NotificationSink for WriterNotifier<W> {
    fn notify(&mut self, notification: Notification) -> Result<(), NotifyError> {
        writeln!(self.writer, "[{}] {}", notification.level, notification.message)?;
        Ok(())
    }
}

/// A logout step that did not complete.
#[derive(Debug, Error)]
pub enum LogoutStepError {
    #[error("failed to erase stored {key}: {source}")]
    Erase {
        key: &'static str,
        #[source]
        source: SessionStoreError,
    },
    #[error("failed to show logout notification: {0}")]
    Notify(#[source] NotifyError),
}

/// Outcome of a logout run.
#[derive(Debug, Default)]
pub struct LogoutReport {
    pub failures: Vec<LogoutStepError>,
}

impl LogoutReport {
    /// `true` when every step completed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collaborators the logout flow writes to.
pub struct LogoutContext<'a> {
    pub store: &'a dyn SessionStore,
    pub identity: &'a mut dyn IdentitySlot,
    pub notifier: &'a mut dyn NotificationSink,
    pub router: &'a mut dyn Router,
}

/// Ends the current session.
///
/// Order: erase `token`, erase `user`, clear identity, notify, navigate to `/`.
pub fn logout(context: LogoutContext<'_>) -> LogoutReport {
    let LogoutContext {
        store,
        identity,
        notifier,
        router,
    } = context;
    let mut report = LogoutReport::default();

    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(source) = store.erase(key) {
            warn!(key, backend = store.backend().as_str(), error = %source, "Failed to erase session entry");
            report.failures.push(LogoutStepError::Erase { key, source });
        }
    }

    identity.set_identity(None);

    if let Err(error) = notifier.notify(Notification::success(LOGOUT_MESSAGE)) {
        warn!(error = %error, "Failed to deliver logout notification");
        report.failures.push(LogoutStepError::Notify(error));
    }

    router.navigate(LANDING_ROUTE);

    info!(failed_steps = report.failures.len(), "Session terminated");
    report
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use horizon_types::NotificationLevel;
    use horizon_util::SessionBackend;

    use super::*;

    /// Every collaborator call, in the order it happened.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Erase(String),
        SetIdentity(Option<String>),
        Notify(NotificationLevel, String),
        Navigate(String),
    }

    type CallLog = Arc<Mutex<Vec<Call>>>;

    fn record(log: &CallLog, call: Call) {
        log.lock().expect("call log").push(call);
    }

    /// Recording fake for all four collaborators.
    #[derive(Debug)]
    struct Recorder {
        pub log: CallLog,
        pub fail_erase: bool,
        pub fail_notify: bool,
        pub route: String,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                log: CallLog::default(),
                fail_erase: false,
                fail_notify: false,
                route: "/dashboard".to_string(),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.log.lock().expect("call log").clone()
        }

        pub fn clear(&self) {
            self.log.lock().expect("call log").clear();
        }
    }

    impl IdentitySlot for Recorder {
        fn set_identity(&mut self, identity: Option<UserRecord>) {
            record(&self.log, Call::SetIdentity(identity.map(|user| user.full_name)));
        }
    }

    #[derive(Debug)]
    struct RecordingStore {
        log: CallLog,
        fail: bool,
    }

    impl SessionStore for RecordingStore {
        fn read(&self, _key: &str) -> Result<Option<String>, SessionStoreError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), SessionStoreError> {
            Ok(())
        }

        fn erase(&self, key: &str) -> Result<(), SessionStoreError> {
            record(&self.log, Call::Erase(key.to_string()));
            if self.fail {
                return Err(SessionStoreError::Keyring {
                    key: key.to_string(),
                    error: "keychain locked".to_string(),
                });
            }
            Ok(())
        }

        fn backend(&self) -> SessionBackend {
            SessionBackend::Memory
        }
    }

    struct RecordingNotifier {
        log: CallLog,
        fail: bool,
    }

    impl NotificationSink for RecordingNotifier {
        fn notify(&mut self, notification: Notification) -> Result<(), NotifyError> {
            record(&self.log, Call::Notify(notification.level, notification.message));
            if self.fail {
                return Err(NotifyError::Unavailable);
            }
            Ok(())
        }
    }

    struct RecordingRouter {
        log: CallLog,
        route: String,
    }

    impl Router for RecordingRouter {
        fn navigate(&mut self, path: &str) {
            record(&self.log, Call::Navigate(path.to_string()));
            self.route = path.to_string();
        }

        fn current_route(&self) -> &str {
            &self.route
        }
    }

    fn run_recorded_logout(recorder: &mut Recorder) -> LogoutReport {
        let store = RecordingStore {
            log: Arc::clone(&recorder.log),
            fail: recorder.fail_erase,
        };
        let mut notifier = RecordingNotifier {
            log: Arc::clone(&recorder.log),
            fail: recorder.fail_notify,
        };
        let mut router = RecordingRouter {
            log: Arc::clone(&recorder.log),
            route: recorder.route.clone(),
        };
        let report = logout(LogoutContext {
            store: &store,
            identity: recorder,
            notifier: &mut notifier,
            router: &mut router,
        });
        recorder.route = router.route;
        report
    }

    fn expected_calls() -> Vec<Call> {
        vec![
            Call::Erase("token".into()),
            Call::Erase("user".into()),
            Call::SetIdentity(None),
            Call::Notify(NotificationLevel::Success, LOGOUT_MESSAGE.into()),
            Call::Navigate("/".into()),
        ]
    }

    #[test]
    fn logout_runs_steps_in_order() {
        let mut recorder = Recorder::new();
        let report = run_recorded_logout(&mut recorder);
        assert!(report.is_clean());
        assert_eq!(recorder.calls(), expected_calls());
        assert_eq!(recorder.route, "/");
    }

    #[test]
    fn logout_twice_repeats_identical_effects() {
        let mut recorder = Recorder::new();
        let first = run_recorded_logout(&mut recorder);
        let first_calls = recorder.calls();
        recorder.clear();

        let second = run_recorded_logout(&mut recorder);
        assert!(first.is_clean());
        assert!(second.is_clean());
        assert_eq!(recorder.calls(), first_calls);
    }

    #[test]
    fn failing_erase_does_not_block_later_steps() {
        let mut recorder = Recorder::new();
        recorder.fail_erase = true;
        let report = run_recorded_logout(&mut recorder);

        assert_eq!(recorder.calls(), expected_calls());
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(report.failures[0], LogoutStepError::Erase { key: "token", .. }));
        assert!(matches!(report.failures[1], LogoutStepError::Erase { key: "user", .. }));
    }

    #[test]
    fn failing_notification_still_navigates() {
        let mut recorder = Recorder::new();
        recorder.fail_notify = true;
        let report = run_recorded_logout(&mut recorder);

        assert_eq!(recorder.calls().last(), Some(&Call::Navigate("/".into())));
        assert!(matches!(report.failures.as_slice(), [LogoutStepError::Notify(NotifyError::Unavailable)]));
    }

    #[test]
    fn identity_option_is_cleared() {
        let mut identity = Some(UserRecord {
            id: "1".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            passout_year: Some(1843),
            current_location: None,
            current_company: None,
            domain: None,
            phone: None,
        });
        let store = horizon_util::session_store::MemorySessionStore::with_entries([("token", "t"), ("user", "{}")]);
        let mut notifier = WriterNotifier::new(Vec::new());
        let mut router = crate::router::RouteState::new("/profile");

        let report = logout(LogoutContext {
            store: &store,
            identity: &mut identity,
            notifier: &mut notifier,
            router: &mut router,
        });

        assert!(report.is_clean());
        assert!(identity.is_none());
        assert_eq!(store.read("token").expect("read"), None);
        assert_eq!(store.read("user").expect("read"), None);
        assert_eq!(router.current_route(), "/");
        let printed = String::from_utf8(notifier.into_inner()).expect("utf8");
        assert_eq!(printed, "[success] Logged out successfully\n");
    }
}
