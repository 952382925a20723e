//! Theme builder with derived tints

use super::Theme;
use palette::{LinSrgb, Mix, Srgb};
use ratatui::style::Color;

/// Builds a theme from core colors, deriving the tinted ones unless set
pub struct ThemeBuilder {
    theme: Theme,
    tints_set: bool,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            theme: Theme {
                name: name.into(),
                display_name: display_name.into(),
                bg_color: Color::Black,
                panel_bg_color: Color::Black,
                accent_color: Color::White,
                text_color: Color::White,
                bar_bg_color: Color::Black,
                segment_empty_color: Color::Black,
                separator_color: Color::White,
                pulse_dim_color: Color::Black,
            },
            tints_set: false,
        }
    }

    /// Set core colors - these are required for every theme
    pub fn core_colors(mut self, bg: Color, panel_bg: Color, accent: Color, text: Color) -> Self {
        self.theme.bg_color = bg;
        self.theme.panel_bg_color = panel_bg;
        self.theme.accent_color = accent;
        self.theme.text_color = text;
        self
    }

    /// Set the tints explicitly, for palettes that can't be blended
    /// (indexed terminal colors)
    pub fn tint_colors(
        mut self,
        bar_bg: Color,
        segment_empty: Color,
        separator: Color,
        pulse_dim: Color,
    ) -> Self {
        self.theme.bar_bg_color = bar_bg;
        self.theme.segment_empty_color = segment_empty;
        self.theme.separator_color = separator;
        self.theme.pulse_dim_color = pulse_dim;
        self.tints_set = true;
        self
    }

    pub fn build(mut self) -> Theme {
        if !self.tints_set {
            let accent = self.theme.accent_color;
            let base = self.theme.panel_bg_color;
            self.theme.bar_bg_color = blend(base, accent, 0.2);
            self.theme.segment_empty_color = blend(base, accent, 0.1);
            self.theme.separator_color = blend(base, accent, 0.5);
            self.theme.pulse_dim_color = blend(base, accent, 0.35);
        }
        self.theme
    }
}

/// Mix `over` into `base` by `factor` in linear RGB.
///
/// Non-RGB colors can't be blended; `over` is returned unless the factor
/// is under one half.
pub fn blend(base: Color, over: Color, factor: f32) -> Color {
    match (to_srgb(base), to_srgb(over)) {
        (Some(a), Some(b)) => {
            let a: LinSrgb = a.into_linear();
            let b: LinSrgb = b.into_linear();
            let mixed: Srgb = Srgb::from_linear(a.mix(b, factor.clamp(0.0, 1.0)));
            let out: Srgb<u8> = mixed.into_format();
            Color::Rgb(out.red, out.green, out.blue)
        }
        _ if factor < 0.5 => base,
        _ => over,
    }
}

fn to_srgb(color: Color) -> Option<Srgb<f32>> {
    match color {
        Color::Rgb(r, g, b) => Some(Srgb::new(r, g, b).into_format()),
        Color::Black => Some(Srgb::new(0.0, 0.0, 0.0)),
        _ => None,
    }
}
