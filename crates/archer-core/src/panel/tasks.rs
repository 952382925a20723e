//! Timing tasks
//!
//! Three loops, each owning its own slice of state. The sequencer publishes
//! progress on a watch channel, the step logger reacts to it, and the noise
//! generator runs on its own interval. All of them report to the reducer
//! through the shared event queue and stop when their token is cancelled.
//!
//! The watch channel only keeps the latest value. If the step logger is
//! starved long enough for the last in-cycle update to be overwritten by the
//! wrap, it resets its cursor without seeing that update, and the DONE line
//! for the step finished just before the wrap is not emitted.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::events::{PanelEvent, ProgressUpdate};
use crate::config::PanelConfig;
use crate::data::RESTART_MESSAGE;
use crate::noise::NoiseGenerator;
use crate::sequencer::{step_index, ProgressSequencer, Tick};
use crate::steps::StepTracker;

/// What every task gets: the mount instant, the event queue and a token
#[derive(Clone)]
pub(super) struct TaskContext {
    pub epoch: Instant,
    pub events: mpsc::UnboundedSender<PanelEvent>,
    pub cancel: CancellationToken,
}

impl TaskContext {
    fn since_mount(&self) -> Duration {
        Instant::now().saturating_duration_since(self.epoch)
    }

    /// Queue an event; false once the reducer side is gone
    fn send(&self, event: PanelEvent) -> bool {
        self.events.send(event).is_ok()
    }

    fn log(&self, message: String) -> bool {
        self.send(PanelEvent::Log {
            at: self.since_mount(),
            message,
        })
    }
}

pub(super) async fn run_sequencer(
    ctx: TaskContext,
    config: PanelConfig,
    progress: watch::Sender<ProgressUpdate>,
) {
    let mut sequencer = ProgressSequencer::new(config.cycle_duration, Duration::ZERO);
    let mut ticker = time::interval(config.sequencer_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let update = match sequencer.tick(ctx.since_mount()) {
            Tick::Advanced(value) => ProgressUpdate {
                value,
                cycle: sequencer.cycle(),
            },
            Tick::Restarted => {
                if !ctx.log(RESTART_MESSAGE.to_string()) {
                    break;
                }
                ProgressUpdate {
                    value: 0.0,
                    cycle: sequencer.cycle(),
                }
            }
        };

        progress.send_replace(update);
        if !ctx.send(PanelEvent::Progress(update)) {
            break;
        }
    }

    tracing::debug!("Progress sequencer stopped");
}

pub(super) async fn run_step_logger(
    ctx: TaskContext,
    steps: Arc<[String]>,
    mut progress: watch::Receiver<ProgressUpdate>,
) {
    let mut tracker = StepTracker::new();
    let mut cycle = progress.borrow().cycle;

    loop {
        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => break,
            changed = progress.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        let update = *progress.borrow_and_update();
        if update.cycle != cycle {
            cycle = update.cycle;
            tracker.reset();
        }

        let index = step_index(update.value, steps.len());
        for done in tracker.observe(index) {
            tracing::trace!(step = done, next = index, "Step complete");
            let message = format!("{}... DONE", steps[done].to_uppercase());
            if !ctx.log(message) {
                return;
            }
        }
    }

    tracing::debug!("Step logger stopped");
}

pub(super) async fn run_noise(ctx: TaskContext, config: PanelConfig) {
    let mut noise = NoiseGenerator::new(StdRng::from_entropy(), &config);
    let period = config.noise_interval;
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let tick = noise.tick();
        let mut open = match tick.log {
            Some(line) => ctx.log(line),
            None => true,
        };
        open &= ctx.send(PanelEvent::MemAddr(tick.mem_addr));
        if let Some(count) = tick.thread_count {
            open &= ctx.send(PanelEvent::ThreadCount(count));
        }
        if !open {
            break;
        }
    }

    tracing::debug!("Noise generator stopped");
}
