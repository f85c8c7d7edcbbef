//! # Command Execution Layer
//!
//! Translates the [`Effect`]s returned by components and `App::update` into
//! state changes on the router, the session store, the identity and the toast
//! stack. Components stay pure; this module is where side effects happen.
//!
//! Effects run strictly in order. Menu activation yields
//! `[Navigate(path), CloseSidebar]`, so the route changes before the panel
//! closes.

use horizon_types::{Effect, Msg};
use tracing::debug;

use crate::app::App;
use crate::router::Router;
use crate::session::{LogoutContext, logout};

/// Executes `effects` in order against `app`.
///
/// Effects produced while handling an effect (for example by `App::update`)
/// are appended to the queue and executed in the same call.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) {
    let mut queue = std::collections::VecDeque::from(effects);
    while let Some(effect) = queue.pop_front() {
        queue.extend(run_effect(app, effect));
    }
}

fn run_effect(app: &mut App, effect: Effect) -> Vec<Effect> {
    match effect {
        Effect::Navigate(path) => {
            app.router.navigate(&path);
            app.mark_dirty();
            Vec::new()
        }
        Effect::ToggleSidebar => app.update(&Msg::ToggleSidebar),
        Effect::CloseSidebar => app.update(&Msg::CloseSidebar),
        Effect::Logout => {
            execute_logout(app);
            Vec::new()
        }
        Effect::Notify(notification) => {
            app.toasts.push(notification);
            app.mark_dirty();
            Vec::new()
        }
        Effect::Quit => {
            debug!("quit requested");
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// Runs the logout flow with the toast stack as the notification sink.
fn execute_logout(app: &mut App) {
    let App { ctx, router, toasts, .. } = &mut *app;
    logout(LogoutContext {
        store: ctx.session_store.as_ref(),
        identity: &mut ctx.identity,
        notifier: toasts,
        router,
    });
    app.mark_dirty();
}

#[cfg(test)]
mod tests {
    use horizon_types::Notification;

    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::components::sidebar::{MENU_ENTRIES, SidebarRow};

    #[test]
    fn menu_activation_navigates_then_closes() {
        let mut app = test_app(60, 30, "/");
        app.update(&Msg::ToggleSidebar);

        run_from_effects(&mut app, vec![Effect::Navigate("/profile".into()), Effect::CloseSidebar]);
        assert_eq!(app.router.current_route(), "/profile");
        assert!(!app.sidebar.toggle.is_open());
    }

    #[test]
    fn activation_closes_the_panel_for_every_entry() {
        for (index, entry) in MENU_ENTRIES.iter().enumerate() {
            let mut app = test_app(60, 30, "/");
            app.update(&Msg::ToggleSidebar);
            let effects = app.sidebar.activation_effects(SidebarRow::Entry(index));
            run_from_effects(&mut app, effects);
            assert!(!app.sidebar.toggle.is_open(), "{} left the panel open", entry.test_id);
            assert_eq!(app.router.current_route(), entry.path);
        }
    }

    #[test]
    fn logout_clears_session_and_returns_to_landing() {
        let mut app = test_app(60, 30, "/profile");
        run_from_effects(&mut app, vec![Effect::Logout]);

        assert_eq!(app.ctx.identity, None);
        assert_eq!(app.router.current_route(), "/");
        assert_eq!(app.ctx.session_store.read("token").expect("read"), None);
        assert_eq!(app.ctx.session_store.read("user").expect("read"), None);
        let toast = app.toasts.visible().last().expect("toast");
        assert_eq!(toast.notification, Notification::success("Logged out successfully"));

        run_from_effects(&mut app, vec![Effect::Logout]);
        assert_eq!(app.router.current_route(), "/");
        assert_eq!(app.toasts.len(), 2);
    }

    #[test]
    fn notify_and_quit() {
        let mut app = test_app(60, 30, "/");
        run_from_effects(&mut app, vec![Effect::Notify(Notification::warning("heads up")), Effect::Quit]);
        assert_eq!(app.toasts.len(), 1);
        assert!(app.should_quit);
    }
}
