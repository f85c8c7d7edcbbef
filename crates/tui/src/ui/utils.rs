//! Layout and text helpers shared by the UI components.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

/// Index of the area containing the cell `(x, y)`.
///
/// Returns `None` when the cell is outside `container` or hits no area.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    areas.iter().position(|area| area.contains(position))
}

/// Truncates `text` to at most `max_width` display columns, appending `…`
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = usize::from(max_width);
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}
