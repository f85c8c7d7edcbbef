//! Application state for the portal shell.
//!
//! `App` owns every piece of UI state (route, sidebar, toasts, focus) plus a
//! shared context with the theme, the session store and the member identity.
//! `App::update` handles messages and returns effects; the command layer in
//! `cmd` is the only place those effects touch the outside world.

use std::sync::Arc;

use chrono::Local;
use horizon_types::{DASHBOARD_ROUTE, Effect, LANDING_ROUTE, Msg, UserRecord};
use horizon_util::{SessionStore, USER_KEY};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::router::RouteState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::components::toasts::ToastState;
use crate::ui::layout::{LayoutMode, ShellAreas, ShellLayout};
use crate::ui::theme::Theme;

/// Cross-cutting context shared by all components.
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Catalog id of the active theme
    pub theme_id: &'static str,
    /// Persistent credential storage
    pub session_store: Arc<dyn SessionStore>,
    /// The signed-in member, if any
    pub identity: Option<UserRecord>,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx")
            .field("theme_id", &self.theme_id)
            .field("session_store", &self.session_store)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub router: RouteState,
    pub sidebar: SidebarState,
    pub toasts: ToastState,
    /// Global focus tree, rebuilt before each frame
    pub focus: Focus,
    /// Current terminal area
    pub area: Rect,
    pub should_quit: bool,
    root_focus: FocusFlag,
    dirty: bool,
}

impl App {
    pub fn new(ctx: SharedCtx, initial_route: &str, area: Rect) -> Self {
        let mut app = Self {
            ctx,
            router: RouteState::new(initial_route),
            sidebar: SidebarState::default(),
            toasts: ToastState::default(),
            focus: Focus::default(),
            area,
            should_quit: false,
            root_focus: FocusFlag::named("root"),
            dirty: true,
        };
        app.refresh_focus();
        app
    }

    /// Handles a message and returns the effects it implies.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if self.toasts.expire(Local::now()) {
                    self.mark_dirty();
                }
                Vec::new()
            }
            Msg::Resize(width, height) => {
                self.area = Rect::new(0, 0, *width, *height);
                debug!(width, height, mode = ?self.layout_mode(), "resize");
                self.refresh_focus();
                self.mark_dirty();
                Vec::new()
            }
            Msg::ToggleSidebar => {
                self.sidebar.toggle.toggle();
                self.after_panel_change();
                Vec::new()
            }
            Msg::CloseSidebar => {
                if self.sidebar.toggle.close() {
                    self.after_panel_change();
                }
                Vec::new()
            }
            Msg::Navigate(path) => vec![Effect::Navigate(path.clone())],
            Msg::Logout => vec![Effect::Logout],
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.area.width)
    }

    /// Areas for the current terminal size and panel state.
    pub fn shell_areas(&self) -> ShellAreas {
        ShellLayout::compute(self.area, self.sidebar.toggle.is_open())
    }

    /// The sidebar is pinned in the wide layout and follows the toggle otherwise.
    pub fn sidebar_visible(&self) -> bool {
        self.layout_mode() == LayoutMode::Wide || self.sidebar.toggle.is_open()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Rebuilds the focus tree from the current visibility.
    pub fn refresh_focus(&mut self) {
        if !self.sidebar_visible() {
            self.sidebar.clear_focus();
        }
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = FocusBuilder::rebuild_for(&*self, Some(old_focus));
        if self.focus.focused().is_none() && self.sidebar_visible() {
            self.focus.first();
        }
    }

    fn after_panel_change(&mut self) {
        self.refresh_focus();
        self.mark_dirty();
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        if self.sidebar_visible() {
            builder.widget(&self.sidebar);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.root_focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

/// Reads the stored member from the `user` key.
///
/// Missing entries, read failures and unparseable payloads all yield `None`;
/// the latter two are logged.
pub fn restore_identity(store: &dyn SessionStore) -> Option<UserRecord> {
    let raw = match store.read(USER_KEY) {
        Ok(raw) => raw?,
        Err(error) => {
            warn!(error = %error, backend = store.backend().as_str(), "Failed to read stored member");
            return None;
        }
    };
    match UserRecord::from_json(&raw) {
        Ok(user) => Some(user),
        Err(error) => {
            warn!(error = %error, "Stored member is not valid JSON; treating session as signed out");
            None
        }
    }
}

/// Picks the first route: explicit request, then the saved preference, then a
/// default that depends on whether a member is signed in.
pub fn initial_route(requested: Option<&str>, preferred: Option<&str>, signed_in: bool) -> String {
    requested
        .or(preferred)
        .map(str::to_string)
        .unwrap_or_else(|| if signed_in { DASHBOARD_ROUTE } else { LANDING_ROUTE }.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use horizon_util::session_store::MemorySessionStore;

    use super::*;
    use crate::router::Router;
    use crate::ui::theme::{HorizonTheme, catalog};

    pub(crate) fn member() -> UserRecord {
        UserRecord::from_json(r#"{"id":"42","full_name":"Grace Hopper","email":"grace@example.com","passout_year":1934}"#)
            .expect("member json")
    }

    pub(crate) fn test_app(width: u16, height: u16, route: &str) -> App {
        let store = MemorySessionStore::with_entries([("token", "abc"), ("user", "{}")]);
        let ctx = SharedCtx {
            theme: Box::new(HorizonTheme::default()),
            theme_id: catalog::default_truecolor().id,
            session_store: Arc::new(store),
            identity: Some(member()),
        };
        App::new(ctx, route, Rect::new(0, 0, width, height))
    }

    #[test]
    fn toggle_and_close_messages_drive_the_panel() {
        let mut app = test_app(60, 30, "/events");
        assert!(!app.sidebar_visible());
        app.take_dirty();

        app.update(&Msg::ToggleSidebar);
        assert!(app.sidebar.toggle.is_open());
        assert!(app.sidebar_visible());
        assert!(app.take_dirty());

        app.update(&Msg::CloseSidebar);
        assert!(!app.sidebar.toggle.is_open());
        assert!(app.take_dirty());

        app.update(&Msg::CloseSidebar);
        assert!(!app.take_dirty());
    }

    #[test]
    fn wide_layout_pins_sidebar_without_touching_the_flag() {
        let mut app = test_app(60, 30, "/events");
        app.update(&Msg::Resize(140, 40));
        assert!(app.sidebar_visible());
        assert!(!app.sidebar.toggle.is_open());
        assert_eq!(app.router.current_route(), "/events");
    }

    #[test]
    fn opening_the_panel_focuses_the_first_row() {
        let mut app = test_app(60, 30, "/");
        app.update(&Msg::ToggleSidebar);
        assert_eq!(app.sidebar.focused_index(), Some(0));

        app.update(&Msg::ToggleSidebar);
        assert_eq!(app.sidebar.focused_index(), None);
    }

    #[test]
    fn navigate_and_logout_messages_become_effects() {
        let mut app = test_app(60, 30, "/");
        assert_eq!(app.update(&Msg::Navigate("/about".into())), vec![Effect::Navigate("/about".into())]);
        assert_eq!(app.update(&Msg::Logout), vec![Effect::Logout]);
    }

    #[test]
    fn identity_is_restored_from_the_user_key() {
        let store = MemorySessionStore::with_entries([(
            "user",
            r#"{"id":"7","full_name":"Ada Lovelace","email":"ada@example.com"}"#,
        )]);
        let user = restore_identity(&store).expect("stored member");
        assert_eq!(user.full_name, "Ada Lovelace");

        let corrupt = MemorySessionStore::with_entries([("user", "not json")]);
        assert_eq!(restore_identity(&corrupt), None);
        assert_eq!(restore_identity(&MemorySessionStore::default()), None);
    }

    #[test]
    fn initial_route_precedence() {
        assert_eq!(initial_route(Some("/events"), Some("/about"), true), "/events");
        assert_eq!(initial_route(None, Some("/about"), false), "/about");
        assert_eq!(initial_route(None, None, true), "/dashboard");
        assert_eq!(initial_route(None, None, false), "/");
    }
}
