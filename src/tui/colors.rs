//! Color constants for the terminal user interface.

use ratatui::style::{Color, Modifier, Style};

use crate::fields::Tint;

// Light backgrounds with a dark foreground of the same hue, so tinted
// badges and stat values stay readable on both dark and light terminals.

pub const BLUE_BG: Color = Color::Rgb(219, 234, 254);
pub const BLUE_FG: Color = Color::Rgb(29, 78, 216);
pub const GREEN_BG: Color = Color::Rgb(220, 252, 231);
pub const GREEN_FG: Color = Color::Rgb(21, 128, 61);
pub const YELLOW_BG: Color = Color::Rgb(254, 249, 195);
pub const YELLOW_FG: Color = Color::Rgb(161, 98, 7);
pub const RED_BG: Color = Color::Rgb(254, 226, 226);
pub const RED_FG: Color = Color::Rgb(185, 28, 28);

/// Used for the login button, avatar and logo
pub const SLATE: Color = Color::Rgb(30, 41, 59);
/// Used for the table header
pub const HEADER_GRAY: Color = Color::Rgb(229, 231, 235);
/// Placeholder and muted text
pub const MUTED: Color = Color::Rgb(107, 114, 128);

/// Background and foreground pair for a tint.
pub fn tint_colors(tint: Tint) -> (Color, Color) {
    match tint {
        Tint::Blue => (BLUE_BG, BLUE_FG),
        Tint::Green => (GREEN_BG, GREEN_FG),
        Tint::Yellow => (YELLOW_BG, YELLOW_FG),
        Tint::Red => (RED_BG, RED_FG),
    }
}

pub fn tint_style(tint: Tint) -> Style {
    let (bg, fg) = tint_colors(tint);
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}
