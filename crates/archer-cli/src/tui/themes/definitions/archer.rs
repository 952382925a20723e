use super::super::base::ThemeBuilder;
use super::super::Theme;
use ratatui::style::Color;

/// Archer Exchange orange on black - the default
pub fn archer() -> Theme {
    let orange = Color::Rgb(255, 120, 52); // #FF7834
    ThemeBuilder::new("archer", "Archer Exchange")
        .core_colors(Color::Rgb(5, 5, 5), Color::Rgb(0, 0, 0), orange, orange)
        .build()
}
