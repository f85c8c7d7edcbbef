use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use horizon_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons::{IconId, icon_glyph};
use crate::ui::theme::theme_helpers::render_button;

/// Menu button shown in the top-left corner of the narrow layout.
#[derive(Debug, Default)]
pub struct MenuToggleComponent;

impl MenuToggleComponent {
    /// Glyph for the current panel state.
    pub fn glyph(is_open: bool) -> &'static str {
        if is_open { icon_glyph(IconId::Close) } else { icon_glyph(IconId::Menu) }
    }
}

impl Component for MenuToggleComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.shell_areas().toggle {
            Some(area) if area.contains(Position::new(mouse.column, mouse.row)) => vec![Effect::ToggleSidebar],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let is_open = app.sidebar.toggle.is_open();
        render_button(frame, area, Self::glyph(is_open), &*app.ctx.theme, is_open);
    }
}
