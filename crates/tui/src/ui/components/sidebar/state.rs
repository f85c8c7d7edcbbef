use horizon_types::Effect;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use super::menu::{LOGOUT_TEST_ID, MENU_ENTRIES, MenuEntry};
use super::toggle::PanelToggle;
use crate::ui::utils::find_target_index_by_mouse_position;

/// A focusable row in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// Index into the menu entries.
    Entry(usize),
    /// The logout button below the entries.
    Logout,
}

/// State for the sidebar.
///
/// Owns the panel toggle, the menu entries, rat-focus flags for the container
/// and for each row (entries followed by logout), and the last rendered
/// geometry used for mouse hit testing.
#[derive(Debug, Clone)]
pub struct SidebarState {
    /// Open/closed flag; only meaningful in the narrow layout.
    pub toggle: PanelToggle,
    /// Entries displayed in the sidebar, in display order.
    pub entries: &'static [MenuEntry],
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// One flag per row; the last one belongs to the logout button.
    pub row_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the sidebar.
    pub last_area: Rect,
    /// Last rendered row areas, same order as `row_focus_flags`.
    pub per_row_areas: Vec<Rect>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(MENU_ENTRIES)
    }
}

impl SidebarState {
    pub fn new(entries: &'static [MenuEntry]) -> Self {
        let row_focus_flags = (0..=entries.len())
            .map(|i| FocusFlag::named(&format!("sidebar.row.{i}")))
            .collect();
        Self {
            toggle: PanelToggle::default(),
            entries,
            container_focus: FocusFlag::named("sidebar"),
            row_focus_flags,
            last_area: Rect::default(),
            per_row_areas: Vec::new(),
        }
    }

    /// Number of focusable rows (entries plus logout).
    pub fn row_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn row(&self, index: usize) -> Option<SidebarRow> {
        match index {
            i if i < self.entries.len() => Some(SidebarRow::Entry(i)),
            i if i == self.entries.len() => Some(SidebarRow::Logout),
            _ => None,
        }
    }

    /// Index of the focused row, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.row_focus_flags.iter().position(|flag| flag.get())
    }

    pub fn focused_row(&self) -> Option<SidebarRow> {
        self.focused_index().and_then(|index| self.row(index))
    }

    /// Flag of the row after (or before) the focused one, wrapping around.
    /// Starts at the first row when nothing is focused yet.
    pub fn cycle_focus(&self, increment: bool) -> Option<FocusFlag> {
        let len = self.row_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(index) if increment => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.row_focus_flags.get(next).cloned()
    }

    /// Sets row focus directly, bypassing the global focus tree.
    pub fn focus_row(&self, index: usize) {
        for (i, flag) in self.row_focus_flags.iter().enumerate() {
            flag.set(i == index);
        }
    }

    /// Drops row and container focus, used when the panel is hidden.
    pub fn clear_focus(&self) {
        self.container_focus.set(false);
        self.row_focus_flags.iter().for_each(|flag| flag.set(false));
    }

    /// Effects produced by activating `row`.
    ///
    /// An entry navigates first and closes the panel second.
    pub fn activation_effects(&self, row: SidebarRow) -> Vec<Effect> {
        match row {
            SidebarRow::Entry(index) => match self.entries.get(index) {
                Some(entry) => {
                    tracing::debug!(test_id = entry.test_id, path = entry.path, "menu entry activated");
                    vec![Effect::Navigate(entry.path.to_string()), Effect::CloseSidebar]
                }
                None => Vec::new(),
            },
            SidebarRow::Logout => {
                tracing::debug!(test_id = LOGOUT_TEST_ID, "logout activated");
                vec![Effect::Logout]
            }
        }
    }

    /// Row under the given terminal cell, based on the last render.
    pub fn row_at(&self, column: u16, row: u16) -> Option<SidebarRow> {
        find_target_index_by_mouse_position(&self.last_area, &self.per_row_areas, column, row).and_then(|index| self.row(index))
    }
}

impl HasFocus for SidebarState {
    /// Builds a focus subtree with each row as a leaf under the container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.row_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_entries_then_logout() {
        let state = SidebarState::default();
        assert_eq!(state.row_count(), MENU_ENTRIES.len() + 1);
        assert_eq!(state.row(0), Some(SidebarRow::Entry(0)));
        assert_eq!(state.row(MENU_ENTRIES.len()), Some(SidebarRow::Logout));
        assert_eq!(state.row(MENU_ENTRIES.len() + 1), None);
    }

    #[test]
    fn cycle_focus_wraps_in_both_directions() {
        let state = SidebarState::default();
        let last = state.row_count() - 1;

        let first = state.cycle_focus(true).expect("first row");
        assert_eq!(first.widget_id(), state.row_focus_flags[0].widget_id());

        state.focus_row(last);
        let wrapped = state.cycle_focus(true).expect("wraps forward");
        assert_eq!(wrapped.widget_id(), state.row_focus_flags[0].widget_id());

        state.focus_row(0);
        let back = state.cycle_focus(false).expect("wraps backward");
        assert_eq!(back.widget_id(), state.row_focus_flags[last].widget_id());
    }

    #[test]
    fn entry_activation_navigates_then_closes() {
        let state = SidebarState::default();
        let profile = MENU_ENTRIES.iter().position(|entry| entry.label == "Profile").expect("profile entry");
        assert_eq!(
            state.activation_effects(SidebarRow::Entry(profile)),
            vec![Effect::Navigate("/profile".into()), Effect::CloseSidebar]
        );
        assert_eq!(state.activation_effects(SidebarRow::Logout), vec![Effect::Logout]);
        assert!(state.activation_effects(SidebarRow::Entry(99)).is_empty());
    }

    #[test]
    fn row_at_uses_last_rendered_geometry() {
        let mut state = SidebarState::default();
        state.last_area = Rect::new(0, 0, 20, 20);
        state.per_row_areas = (0..state.row_count() as u16).map(|i| Rect::new(1, 5 + i, 18, 1)).collect();

        assert_eq!(state.row_at(3, 6), Some(SidebarRow::Entry(1)));
        assert_eq!(state.row_at(3, 5 + MENU_ENTRIES.len() as u16), Some(SidebarRow::Logout));
        assert_eq!(state.row_at(3, 2), None);
        assert_eq!(state.row_at(30, 6), None);
    }
}
