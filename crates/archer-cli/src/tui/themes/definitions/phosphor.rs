use super::super::base::ThemeBuilder;
use super::super::Theme;
use ratatui::style::Color;

/// Green phosphor CRT look
pub fn phosphor() -> Theme {
    ThemeBuilder::new("phosphor", "Phosphor")
        .core_colors(
            Color::Rgb(2, 8, 4),
            Color::Rgb(0, 0, 0),
            Color::Rgb(51, 255, 102),
            Color::Rgb(170, 255, 190),
        )
        .build()
}
