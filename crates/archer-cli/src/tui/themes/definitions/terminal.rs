use super::super::base::ThemeBuilder;
use super::super::Theme;
use ratatui::style::Color;

/// Terminal theme - uses native terminal colors (ANSI 0-15)
/// so the panel follows the user's colorscheme. Tints can't be blended
/// from indexed colors, so they are picked from the palette directly.
pub fn terminal() -> Theme {
    let yellow = Color::Indexed(3);
    let bright_yellow = Color::Indexed(11);
    let bright_black = Color::Indexed(8); // Gray

    // Reset = terminal's default background
    let bg = Color::Reset;

    ThemeBuilder::new("terminal", "Terminal")
        .core_colors(bg, bg, bright_yellow, bright_yellow)
        .tint_colors(bg, bright_black, yellow, yellow)
        .build()
}
