//! Color palette and style constants for the NTS terminal views.
//!
//! Named ANSI colors so output follows the user's terminal theme.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BORDER: Color = Color::Blue;
pub const C_BORDER_ERROR: Color = Color::Red;
pub const C_TIME: Color = Color::Yellow;
pub const C_GENRE: Color = Color::Green;
pub const C_CURRENT: Color = Color::Blue;
pub const C_TYPE: Color = Color::Magenta;
pub const C_MUTED: Color = Color::DarkGray;
pub const C_LINK: Color = Color::Cyan;
pub const C_ERROR: Color = Color::Red;

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default()
}

pub fn style_title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn style_time() -> Style {
    Style::default().fg(C_TIME)
}

pub fn style_genre() -> Style {
    Style::default().fg(C_GENRE)
}

pub fn style_current() -> Style {
    Style::default().fg(C_CURRENT).add_modifier(Modifier::BOLD)
}

pub fn style_type() -> Style {
    Style::default().fg(C_TYPE)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_link() -> Style {
    Style::default().fg(C_LINK)
}

pub fn style_error() -> Style {
    Style::default().fg(C_ERROR)
}

pub fn style_rule() -> Style {
    Style::default().fg(C_BORDER)
}

pub fn style_header() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
