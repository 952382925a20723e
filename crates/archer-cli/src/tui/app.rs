//! Application state
//!
//! Owns the mounted panel handle and the few bits of shell state the frame
//! loop needs (theme, frame rate, pulse phase, quit flag).

use std::time::Duration;

use archer_core::PanelHandle;
use tokio::time::Instant;

use crate::tui::themes::Theme;

/// Half-period of the blinking cursor
const PULSE_PERIOD: Duration = Duration::from_millis(500);

pub struct App {
    pub(crate) panel: PanelHandle,
    pub(crate) theme: Theme,
    pub(crate) frame_interval: Duration,
    started: Instant,
    last_pulse: bool,
    should_quit: bool,
}

impl App {
    pub fn new(panel: PanelHandle, theme: Theme, fps: u16) -> Self {
        Self {
            panel,
            theme,
            frame_interval: Duration::from_secs(1) / u32::from(fps.max(1)),
            started: Instant::now(),
            last_pulse: true,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn pulse_on(&self) -> bool {
        let phase = self.started.elapsed().as_millis() / PULSE_PERIOD.as_millis();
        phase % 2 == 0
    }

    /// Fold panel events into state and advance the pulse.
    /// Returns true if the frame needs redrawing.
    pub(crate) fn tick(&mut self) -> bool {
        let changed = self.panel.sync();
        let pulse = self.pulse_on();
        let pulse_changed = pulse != self.last_pulse;
        self.last_pulse = pulse;
        changed || pulse_changed
    }
}
