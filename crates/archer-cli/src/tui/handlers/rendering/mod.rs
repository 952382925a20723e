//! UI rendering coordinator
//!
//! Dark full-viewport background with the panel centered on top.

use ratatui::{style::Style, widgets::Block, Frame};

use crate::tui::app::App;
use crate::tui::components::AnimatedPanel;
use crate::tui::utils::centered_rect;

/// Largest the panel grows on big terminals
pub const PANEL_MAX_WIDTH: u16 = 100;
pub const PANEL_MAX_HEIGHT: u16 = 34;

impl App {
    pub fn ui(&self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        let snapshot = self.panel.snapshot();
        let panel_area = centered_rect(area, PANEL_MAX_WIDTH, PANEL_MAX_HEIGHT, 1);
        f.render_widget(
            AnimatedPanel::new(&snapshot, &self.theme).pulse(self.pulse_on()),
            panel_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use archer_core::{Panel, PanelConfig};
    use ratatui::{backend::TestBackend, Terminal};

    #[tokio::test(start_paused = true)]
    async fn test_ui_draws_centered_panel() {
        let panel = Panel::mount(PanelConfig::default()).unwrap();
        let theme = THEME_REGISTRY.default_theme().clone();
        let mut app = App::new(panel, theme, 30);

        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        let buf = terminal.backend().buffer();
        // Top-left corner of the thick border sits at the centered offset
        let x = (140 - PANEL_MAX_WIDTH) / 2;
        let y = (50 - PANEL_MAX_HEIGHT) / 2;
        assert_eq!(buf[(x, y)].symbol(), "┏");
        assert_eq!(buf[(0, 0)].bg, app.theme.bg_color);

        app.panel.unmount().await.unwrap();
    }
}
