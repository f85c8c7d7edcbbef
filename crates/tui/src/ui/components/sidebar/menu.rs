use crate::ui::icons::IconId;

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: IconId,
    pub label: &'static str,
    pub path: &'static str,
    /// Stable identifier used by tests and debug logging.
    pub test_id: &'static str,
}

/// The portal sections, in display order.
pub static MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        icon: IconId::Home,
        label: "Home",
        path: "/dashboard",
        test_id: "sidebar-home",
    },
    MenuEntry {
        icon: IconId::Calendar,
        label: "Events",
        path: "/events",
        test_id: "sidebar-events",
    },
    MenuEntry {
        icon: IconId::Message,
        label: "Connect",
        path: "/connect",
        test_id: "sidebar-connect",
    },
    MenuEntry {
        icon: IconId::Heart,
        label: "Donate",
        path: "/donate",
        test_id: "sidebar-donate",
    },
    MenuEntry {
        icon: IconId::Info,
        label: "About",
        path: "/about",
        test_id: "sidebar-about",
    },
    MenuEntry {
        icon: IconId::Mail,
        label: "Contact",
        path: "/contact",
        test_id: "sidebar-contact",
    },
    MenuEntry {
        icon: IconId::User,
        label: "Profile",
        path: "/profile",
        test_id: "sidebar-profile",
    },
];

pub const LOGOUT_LABEL: &str = "Logout";
pub const LOGOUT_TEST_ID: &str = "sidebar-logout";

/// An entry tagged with whether it matches the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedEntry {
    pub entry: MenuEntry,
    pub is_active: bool,
}

/// Index of the entry whose path equals `current_route`, if any.
pub fn active_index(entries: &[MenuEntry], current_route: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.path == current_route)
}

/// Tags every entry with its active state for `current_route`.
pub fn render_list(entries: &[MenuEntry], current_route: &str) -> Vec<RenderedEntry> {
    let active = active_index(entries, current_route);
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| RenderedEntry {
            entry: *entry,
            is_active: Some(index) == active,
        })
        .collect()
}

/// Finds the entry for a path.
pub fn entry_for_path(current_route: &str) -> Option<&'static MenuEntry> {
    MENU_ENTRIES.iter().find(|entry| entry.path == current_route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_paths(route: &str) -> Vec<&'static str> {
        render_list(MENU_ENTRIES, route)
            .into_iter()
            .filter(|rendered| rendered.is_active)
            .map(|rendered| rendered.entry.path)
            .collect()
    }

    #[test]
    fn at_most_one_entry_is_active_for_any_route() {
        let mut routes: Vec<&str> = MENU_ENTRIES.iter().map(|entry| entry.path).collect();
        routes.extend(["/", "", "/events/42", "/EVENTS", "/unknown", "events"]);
        for route in routes {
            let active = active_paths(route);
            assert!(active.len() <= 1, "{route} activated {active:?}");
            if let Some(path) = active.first() {
                assert_eq!(*path, route);
            }
        }
    }

    #[test]
    fn events_route_activates_only_events() {
        let rendered = render_list(MENU_ENTRIES, "/events");
        assert_eq!(rendered.len(), MENU_ENTRIES.len());
        for item in &rendered {
            assert_eq!(item.is_active, item.entry.test_id == "sidebar-events");
        }
    }

    #[test]
    fn unknown_route_has_no_active_entry() {
        assert_eq!(active_index(MENU_ENTRIES, "/"), None);
        assert!(active_paths("/nowhere").is_empty());
    }

    #[test]
    fn duplicate_paths_activate_first_match_only() {
        let entries = [MENU_ENTRIES[0], MENU_ENTRIES[0]];
        let rendered = render_list(&entries, MENU_ENTRIES[0].path);
        assert_eq!(rendered.iter().filter(|r| r.is_active).count(), 1);
        assert!(rendered[0].is_active);
    }

    #[test]
    fn entries_keep_display_order_and_unique_test_ids() {
        let labels: Vec<_> = MENU_ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Home", "Events", "Connect", "Donate", "About", "Contact", "Profile"]);
        let mut ids: Vec<_> = MENU_ENTRIES.iter().map(|entry| entry.test_id).collect();
        ids.push(LOGOUT_TEST_ID);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MENU_ENTRIES.len() + 1);
    }

    #[test]
    fn active_tag_is_deterministic() {
        assert_eq!(render_list(MENU_ENTRIES, "/donate"), render_list(MENU_ENTRIES, "/donate"));
    }
}
