//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the Horizon palette with indexed colors so the shell stays
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(17),
                surface_muted: Color::Indexed(54),
                border: Color::Indexed(25),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(153),
                text_muted: Color::Indexed(247),

                accent_primary: Color::Indexed(216),
                accent_secondary: Color::Indexed(75),

                info: Color::Indexed(75),
                success: Color::Indexed(84),
                warning: Color::Indexed(215),
                error: Color::Indexed(210),

                selection_bg: Color::Indexed(255),
                selection_fg: Color::Indexed(18),
                focus: Color::Indexed(75),

                modal_bg: Color::Indexed(232),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
