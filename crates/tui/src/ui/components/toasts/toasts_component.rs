use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::truncate_to_width;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Stack of toasts in the top-right corner of the content area.
#[derive(Debug, Default)]
pub struct ToastsComponent;

impl Component for ToastsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let width = TOAST_WIDTH.min(area.width);
        if width < 4 {
            return;
        }
        let x = area.right().saturating_sub(width);

        for (index, toast) in app.toasts.visible().enumerate() {
            let y = area.y + TOAST_HEIGHT * index as u16;
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
            let level_style = theme.status_style(toast.notification.level);
            let stamp = toast.shown_at.format("%H:%M:%S ").to_string();
            let message_width = width.saturating_sub(2 + stamp.len() as u16);
            let line = Line::from(vec![
                Span::styled(stamp, theme.text_muted_style()),
                Span::styled(truncate_to_width(&toast.notification.message, message_width), level_style),
            ]);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(level_style)
                .style(th::panel_style(theme));
            frame.render_widget(Clear, toast_area);
            frame.render_widget(Paragraph::new(line).block(block), toast_area);
        }
    }
}
