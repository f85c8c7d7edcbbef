use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Horizon palette: deep navy into violet, matching the portal's sidebar gradient.
pub const NAVY_900: Color = Color::Rgb(0x1E, 0x3A, 0x8A); // #1e3a8a
pub const NAVY_950: Color = Color::Rgb(0x17, 0x25, 0x54); // #172554
pub const VIOLET_900: Color = Color::Rgb(0x58, 0x1C, 0x87); // #581c87
pub const SLATE_950: Color = Color::Rgb(0x0B, 0x10, 0x20); // #0b1020
pub const BLUE_200: Color = Color::Rgb(0xBF, 0xDB, 0xFE); // #bfdbfe
pub const BLUE_400: Color = Color::Rgb(0x60, 0xA5, 0xFA); // #60a5fa
pub const WHITE: Color = Color::Rgb(0xF8, 0xFA, 0xFC); // #f8fafc
pub const GRAY_400: Color = Color::Rgb(0x94, 0xA3, 0xB8); // #94a3b8
pub const ORANGE_300: Color = Color::Rgb(0xFD, 0xBA, 0x74); // #fdba74
pub const GREEN_400: Color = Color::Rgb(0x4A, 0xDE, 0x80); // #4ade80
pub const RED_300: Color = Color::Rgb(0xFC, 0xA5, 0xA5); // #fca5a5

/// Default truecolor theme.
#[derive(Debug, Clone)]
pub struct HorizonTheme {
    roles: ThemeRoles,
}

impl HorizonTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: SLATE_950,
                surface: NAVY_950,
                surface_muted: VIOLET_900,
                border: NAVY_900,

                text: WHITE,
                text_secondary: BLUE_200,
                text_muted: GRAY_400,

                accent_primary: ORANGE_300,
                accent_secondary: BLUE_400,

                info: BLUE_400,
                success: GREEN_400,
                warning: ORANGE_300,
                error: RED_300,

                // Active entry: white pill with navy text
                selection_bg: WHITE,
                selection_fg: NAVY_900,
                focus: BLUE_400,

                modal_bg: Color::Rgb(0x05, 0x07, 0x0F),
            },
        }
    }
}

impl Default for HorizonTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for HorizonTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
