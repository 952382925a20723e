//! Theme system for the Archer panel
//!
//! A handful of built-in palettes. Tinted backgrounds (header bar, empty
//! segments) are derived from the accent by the builder.

use ratatui::style::Color;

pub mod base;
pub mod definitions;
mod registry;

use once_cell::sync::Lazy;
pub use registry::ThemeRegistry;

/// Global theme registry with all built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Name of the theme used when none is configured
pub const DEFAULT_THEME: &str = "archer";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Core colors
    /// Full-viewport background behind the panel
    pub bg_color: Color,
    /// Panel interior
    pub panel_bg_color: Color,
    /// Borders, text, filled segments
    pub accent_color: Color,
    pub text_color: Color,

    // Derived tints
    /// Header and footer bar background (accent at ~20%)
    pub bar_bg_color: Color,
    /// Unfilled segments (accent at ~10%)
    pub segment_empty_color: Color,
    /// Rule above the log pane (accent at ~50%)
    pub separator_color: Color,
    /// Pulse "off" phase of the cursor and status text
    pub pulse_dim_color: Color,
}
