//! Registry of built-in themes

use super::{definitions, Theme, DEFAULT_THEME};

pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            themes: vec![
                definitions::archer(),
                definitions::phosphor(),
                definitions::terminal(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Look up `name`, falling back to the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = name, "Unknown theme, using default");
                self.default_theme()
            }
        }
    }

    pub fn default_theme(&self) -> &Theme {
        self.get(DEFAULT_THEME).unwrap_or(&self.themes[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
