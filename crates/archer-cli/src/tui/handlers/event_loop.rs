//! Frame loop and input handling
//!
//! Draws on a fixed frame interval when something changed and reacts to
//! terminal events from crossterm's async event stream. The panel is
//! unmounted on every way out of the loop.

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::time::{self, MissedTickBehavior};

use crate::tui::app::App;

impl App {
    /// Run until the user quits, then unmount the panel
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let result = self.event_loop(terminal).await;
        let unmounted = self.panel.unmount().await;
        result?;
        unmounted.context("panel did not shut down cleanly")
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut needs_redraw = true;

        while !self.should_quit() {
            tokio::select! {
                _ = frames.tick() => {
                    needs_redraw |= self.tick();
                    if needs_redraw {
                        terminal.draw(|f| self.ui(f)).context("failed to draw frame")?;
                        needs_redraw = false;
                    }
                }
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => needs_redraw |= self.handle_event(&event),
                    Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                    None => {
                        tracing::debug!("Terminal event stream closed");
                        break;
                    }
                },
            }
        }

        tracing::info!("Leaving frame loop");
        Ok(())
    }

    /// Handle one terminal event. Returns true if a redraw is needed.
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    tracing::debug!(key = ?key.code, "Quit requested");
                    self.quit();
                }
                false
            }
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "Terminal resized");
                true
            }
            _ => false,
        }
    }
}
