//! Icon identifiers and their terminal glyphs.
//!
//! Components refer to icons by [`IconId`] only; the glyph is looked up in a
//! single static table so every icon renders the same way everywhere.

/// Symbolic icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Home,
    Calendar,
    Message,
    Heart,
    Info,
    Mail,
    User,
    LogOut,
    Menu,
    Close,
}

// Single-cell glyphs only; the sidebar layout assumes width 1.
static ICON_GLYPHS: &[(IconId, &str)] = &[
    (IconId::Home, "⌂"),
    (IconId::Calendar, "▦"),
    (IconId::Message, "◍"),
    (IconId::Heart, "♥"),
    (IconId::Info, "ⓘ"),
    (IconId::Mail, "✉"),
    (IconId::User, "☺"),
    (IconId::LogOut, "⇤"),
    (IconId::Menu, "≡"),
    (IconId::Close, "✕"),
];

/// Returns the glyph for `icon`.
pub fn icon_glyph(icon: IconId) -> &'static str {
    ICON_GLYPHS
        .iter()
        .find_map(|(id, glyph)| (*id == icon).then_some(*glyph))
        .unwrap_or("?")
}
