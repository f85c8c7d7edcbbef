use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use horizon_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::menu::{LOGOUT_LABEL, render_list};
use super::state::SidebarRow;
use crate::app::App;
use crate::router::Router;
use crate::ui::components::Component;
use crate::ui::icons::{IconId, icon_glyph};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::truncate_to_width;

const BRAND_TITLE: &str = "Global Horizon";
const BRAND_SUBTITLE: &str = "Alumni Network";
const SIGNED_OUT_LABEL: &str = "Signed out";
const HEADER_HEIGHT: u16 = 4;

/// The navigation sidebar: brand header, one row per menu entry, and the
/// logout button pinned to the bottom.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    fn row_label(icon: IconId, label: &str, width: u16) -> String {
        truncate_to_width(&format!(" {}  {}", icon_glyph(icon), label), width)
    }

    fn ensure_row_focus(app: &App) {
        if app.sidebar.focused_index().is_none() {
            app.focus.focus(&app.sidebar);
        }
    }

    fn focus_flag_at(app: &App, index: usize) {
        if let Some(flag) = app.sidebar.row_focus_flags.get(index) {
            app.focus.focus(flag);
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        Self::ensure_row_focus(app);

        let state = &app.sidebar;
        match key.code {
            KeyCode::Down => {
                if let Some(flag) = state.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Up => {
                if let Some(flag) = state.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Home => Self::focus_flag_at(app, 0),
            KeyCode::End => Self::focus_flag_at(app, state.row_count() - 1),
            KeyCode::Enter => {
                if let Some(row) = state.focused_row() {
                    return state.activation_effects(row);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(row) = app.sidebar.row_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        let index = match row {
            SidebarRow::Entry(index) => index,
            SidebarRow::Logout => app.sidebar.entries.len(),
        };
        Self::focus_flag_at(app, index);
        app.sidebar.activation_effects(row)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let is_any_focused = app.sidebar.focused_index().is_some();
        let block = th::block(theme, None, is_any_focused);
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let Some((header_area, row_areas)) = layout.split_first() else {
            return;
        };

        let member = app
            .ctx
            .identity
            .as_ref()
            .map(|user| Span::styled(truncate_to_width(&user.full_name, inner.width), theme.text_primary_style()))
            .unwrap_or_else(|| Span::styled(SIGNED_OUT_LABEL, theme.text_muted_style()));
        let header = Paragraph::new(vec![
            Line::from(Span::styled(BRAND_TITLE, theme.accent_emphasis_style())),
            Line::from(Span::styled(BRAND_SUBTITLE, theme.text_secondary_style())),
            Line::from(member),
        ])
        .style(th::panel_style(theme));
        frame.render_widget(header, *header_area);

        let rendered = render_list(app.sidebar.entries, app.router.current_route());
        for (index, item) in rendered.iter().enumerate() {
            let Some(row_area) = row_areas.get(index).copied() else {
                continue;
            };
            let is_focused = app.sidebar.row_focus_flags.get(index).is_some_and(|flag| flag.get());
            let label = Self::row_label(item.entry.icon, item.entry.label, row_area.width);
            let style = th::nav_row_style(theme, item.is_active, is_focused);
            frame.render_widget(Paragraph::new(label).style(style), row_area);
        }

        let logout_index = rendered.len();
        if let Some(logout_area) = row_areas.get(logout_index).copied() {
            let is_focused = app.sidebar.row_focus_flags.get(logout_index).is_some_and(|flag| flag.get());
            let label = Self::row_label(IconId::LogOut, LOGOUT_LABEL, logout_area.width);
            let style = th::danger_row_style(theme, is_focused).add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(label).style(style), logout_area);
        }

        app.sidebar.last_area = area;
        app.sidebar.per_row_areas = row_areas.to_vec();
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Open "), (" ↑/↓", " Move ")])
    }

    /// Header first, then one row per entry, then the logout row pinned to
    /// the bottom edge.
    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let entry_count = app.sidebar.entries.len();
        let mut constraints = Vec::with_capacity(entry_count + 3);
        constraints.push(Constraint::Length(HEADER_HEIGHT));
        constraints.extend(vec![Constraint::Length(1); entry_count]);
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let mut layout = Layout::vertical(constraints).split(area).to_vec();
        // Drop the spacer so row areas line up with the focus flags.
        layout.remove(entry_count + 1);
        layout
    }
}
