use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the page area behind the sidebar.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for a sidebar row.
///
/// The active row is drawn as a filled pill; focus adds an underline so
/// keyboard position stays visible on top of either state.
pub fn nav_row_style<T: Theme + ?Sized>(theme: &T, is_active: bool, is_focused: bool) -> Style {
    let mut style = if is_active {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        panel_style(theme)
    };
    if is_focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Style for the logout row: error-tinted text on the panel surface.
pub fn danger_row_style<T: Theme + ?Sized>(theme: &T, is_focused: bool) -> Style {
    let ThemeRoles { surface, error, .. } = *theme.roles();
    let style = Style::default().bg(surface).fg(error);
    if is_focused {
        return style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    style
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        surface,
        ..
    } = theme.roles().clone();
    let style = Style::default().fg(accent_secondary).bg(surface);
    if selected {
        return style.bg(selection_bg);
    }
    style
}

/// Renders a standard bordered button with a centered label.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, is_focused: bool) {
    let borders = Borders::ALL;
    frame.render_widget(
        Paragraph::new(label).centered().block(
            Block::bordered()
                .borders(borders)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(is_focused))
                .padding(Padding::ZERO),
        )
        .style(button_secondary_style(theme, false)),
        area,
    );
}

/// Builds `key description` span pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
