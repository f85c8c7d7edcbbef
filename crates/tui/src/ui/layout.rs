//! Responsive shell layout.
//!
//! Wide terminals pin the sidebar to the left edge and never show the menu
//! toggle or the overlay. Narrow terminals reserve a top row for the toggle
//! button and draw the sidebar over a dimmed overlay only while it is open.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width for the pinned-sidebar layout.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;
/// Sidebar width in both layouts (clamped to the terminal width).
pub const SIDEBAR_WIDTH: u16 = 28;
/// Height of the toggle row in the narrow layout.
pub const TOGGLE_ROW_HEIGHT: u16 = 3;
/// Width of the toggle button.
pub const TOGGLE_BUTTON_WIDTH: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> Self {
        if width >= WIDE_LAYOUT_MIN_WIDTH {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub mode: LayoutMode,
    /// Menu toggle button; narrow layout only.
    pub toggle: Option<Rect>,
    /// Sidebar; always present in wide layout, only while open in narrow.
    pub sidebar: Option<Rect>,
    /// Dimmed layer under the open sidebar; narrow layout only.
    pub overlay: Option<Rect>,
    pub content: Rect,
    pub hints: Rect,
}

pub struct ShellLayout;

impl ShellLayout {
    /// Splits `area` for the given panel state.
    pub fn compute(area: Rect, panel_open: bool) -> ShellAreas {
        let [body, hints] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let mode = LayoutMode::for_width(area.width);

        match mode {
            LayoutMode::Wide => {
                let [sidebar, content] =
                    Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]).areas(body);
                ShellAreas {
                    mode,
                    toggle: None,
                    sidebar: Some(sidebar),
                    overlay: None,
                    content,
                    hints,
                }
            }
            LayoutMode::Narrow => {
                let [toggle_row, content] =
                    Layout::vertical([Constraint::Length(TOGGLE_ROW_HEIGHT), Constraint::Min(0)]).areas(body);
                let [toggle, _] =
                    Layout::horizontal([Constraint::Length(TOGGLE_BUTTON_WIDTH), Constraint::Min(0)]).areas(toggle_row);
                let (sidebar, overlay) = if panel_open {
                    let [sidebar, _] =
                        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(content);
                    (Some(sidebar), Some(content))
                } else {
                    (None, None)
                };
                ShellAreas {
                    mode,
                    toggle: Some(toggle),
                    sidebar,
                    overlay,
                    content,
                    hints,
                }
            }
        }
    }
}
