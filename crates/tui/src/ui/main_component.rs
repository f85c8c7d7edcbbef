use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use horizon_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::components::{Component, ContentComponent, MenuToggleComponent, SidebarComponent, ToastsComponent};
use super::layout::LayoutMode;
use super::theme::{Theme, theme_helpers as th};
use crate::app::App;

/// Root component: lays out the shell and routes input to its children.
#[derive(Debug, Default)]
pub struct MainView {
    pub content_view: ContentComponent,
    pub sidebar_view: SidebarComponent,
    pub toggle_view: MenuToggleComponent,
    pub toasts_view: ToastsComponent,
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('l') => vec![Effect::Logout],
            KeyCode::Char('m') if app.layout_mode() == LayoutMode::Narrow => vec![Effect::ToggleSidebar],
            KeyCode::Esc if app.sidebar.toggle.is_open() => vec![Effect::CloseSidebar],
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            _ if app.sidebar_visible() => self.sidebar_view.handle_key_events(app, key),
            _ => Vec::new(),
        }
    }

    /// Hit testing runs top-down: the toggle button, then the sidebar, then
    /// the overlay beneath it.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        let areas = app.shell_areas();

        if areas.toggle.is_some_and(|area| area.contains(position)) {
            return self.toggle_view.handle_mouse_events(app, mouse);
        }
        if let Some(sidebar) = areas.sidebar
            && sidebar.contains(position)
        {
            return self.sidebar_view.handle_mouse_events(app, mouse);
        }
        if areas.overlay.is_some_and(|area| area.contains(position)) {
            return vec![Effect::CloseSidebar];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Paragraph::new("").style(th::page_style(&*app.ctx.theme));
        frame.render_widget(background, area);

        let areas = app.shell_areas();
        self.content_view.render(frame, areas.content, app);

        if let Some(overlay) = areas.overlay {
            render_overlay(frame, overlay, app);
        }
        if let Some(sidebar) = areas.sidebar {
            self.sidebar_view.render(frame, sidebar, app);
        }
        if let Some(toggle) = areas.toggle {
            self.toggle_view.render(frame, toggle, app);
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, areas.hints);

        self.toasts_view.render(frame, areas.content, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", theme.text_muted_style())];

        if app.layout_mode() == LayoutMode::Narrow {
            hint_spans.extend(th::build_hint_spans(theme, &[(" m", " Menu ")]));
        }
        if app.sidebar_visible() {
            hint_spans.extend(self.sidebar_view.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(theme, &[(" l", " Logout "), (" q", " Quit ")]));
        hint_spans
    }
}

/// Dims the area under the open sidebar in the narrow layout.
fn render_overlay(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()).dim(), area);
}
