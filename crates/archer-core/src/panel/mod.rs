//! Mounted panel lifecycle
//!
//! [`Panel::mount`] spawns the timing tasks and returns a [`PanelHandle`].
//! The handle owns the reducer; the frame loop calls [`PanelHandle::sync`]
//! to fold queued events into the state and [`PanelHandle::snapshot`] to
//! draw. [`PanelHandle::unmount`] cancels and joins every task, after which
//! the state never changes again. Dropping the handle cancels as well.

mod events;
mod state;
mod tasks;

pub use events::{PanelEvent, ProgressUpdate};
pub use state::{PanelSnapshot, PanelState};

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::{mpsc, watch};
use tokio::task::{self, JoinSet};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::PanelConfig;
use crate::error::{Error, Result};
use tasks::TaskContext;

pub struct Panel;

impl Panel {
    /// Validate `config` and start the panel's tasks on the current runtime
    pub fn mount(config: PanelConfig) -> Result<PanelHandle> {
        config.validate()?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (progress_tx, progress_rx) = watch::channel(ProgressUpdate::default());
        let cancel = CancellationToken::new();
        let ctx = TaskContext {
            epoch: Instant::now(),
            events: events_tx,
            cancel: cancel.child_token(),
        };

        let mut handle = PanelHandle {
            state: PanelState::new(&config),
            events: events_rx,
            cancel,
            tasks: JoinSet::new(),
            names: HashMap::new(),
            mounted: true,
        };
        handle.spawn(
            "sequencer",
            tasks::run_sequencer(ctx.clone(), config.clone(), progress_tx),
        );
        handle.spawn(
            "step logger",
            tasks::run_step_logger(ctx.clone(), config.steps().clone(), progress_rx),
        );
        handle.spawn("noise", tasks::run_noise(ctx, config.clone()));

        tracing::debug!(
            steps = config.steps().len(),
            cycle_ms = config.cycle_duration.as_millis() as u64,
            "Panel mounted"
        );

        Ok(handle)
    }
}

pub struct PanelHandle {
    state: PanelState,
    events: mpsc::UnboundedReceiver<PanelEvent>,
    cancel: CancellationToken,
    tasks: JoinSet<()>,
    names: HashMap<task::Id, &'static str>,
    mounted: bool,
}

impl PanelHandle {
    fn spawn<F>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.tasks.spawn(future).id();
        self.names.insert(id, name);
    }

    /// Apply every queued event. Returns true if anything changed.
    pub fn sync(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.drain()
    }

    fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            self.state.apply(event);
            changed = true;
        }
        changed
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Cancel all tasks and wait for them to finish.
    ///
    /// Events queued before cancellation are still applied. Calling this
    /// twice is a no-op.
    pub async fn unmount(&mut self) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }

        self.cancel.cancel();

        let mut failure = None;
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                let task = self.names.get(&e.id()).copied().unwrap_or("unknown");
                tracing::warn!(task, error = %e, "Panel task failed");
                if failure.is_none() && e.is_panic() {
                    failure = Some(Error::TaskFailed {
                        task,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.drain();
        self.events.close();
        self.mounted = false;
        tracing::debug!("Panel unmounted");

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Drop for PanelHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const STEPS: [&str; 5] = ["Boot", "Load", "Link", "Sync", "Ready"];

    fn quiet_config() -> PanelConfig {
        PanelConfig::default()
            .with_steps(STEPS)
            .with_noise_log_probability(0.0)
    }

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    /// Advance the paused clock in small increments so every interval fires
    async fn run_for(handle: &mut PanelHandle, total: Duration) {
        let step = Duration::from_millis(10);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            tokio::time::advance(step).await;
            settle().await;
            handle.sync();
            elapsed += step;
        }
    }

    async fn mount(config: PanelConfig) -> PanelHandle {
        let mut handle = Panel::mount(config).unwrap();
        settle().await;
        handle.sync();
        handle
    }

    fn done_lines(logs: &[String]) -> Vec<String> {
        logs.iter().filter(|l| l.ends_with("... DONE")).cloned().collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_rejects_invalid_config() {
        let config = PanelConfig::default().with_noise_ops(Vec::<String>::new());
        assert!(Panel::mount(config).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_follows_clock() {
        let mut handle = mount(quiet_config()).await;
        let mut last = 0.0;
        for _ in 0..190 {
            run_for(&mut handle, Duration::from_millis(30)).await;
            let p = handle.state().progress();
            assert!((0.0..100.0).contains(&p));
            assert!(p >= last, "progress went backwards: {last} -> {p}");
            last = p;
        }
        // 190 * 30ms = 5700ms
        assert!((handle.state().progress() - 95.0).abs() < 1e-6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_timed_from_mount() {
        let mut handle = Panel::mount(quiet_config()).unwrap();
        // Tasks are first polled only after the clock has moved
        tokio::time::advance(Duration::from_millis(900)).await;
        settle().await;
        handle.sync();
        assert!((handle.state().progress() - 15.0).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_half_cycle_step_index() {
        let mut handle = mount(quiet_config()).await;
        run_for(&mut handle, Duration::from_millis(3000)).await;
        let snap = handle.snapshot();
        assert!((snap.progress - 50.0).abs() < 1e-9);
        assert_eq!(snap.step_index, 2);
        assert_eq!(snap.step_label, "Link");
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cycle_restarts() {
        let mut handle = mount(quiet_config()).await;
        run_for(&mut handle, Duration::from_millis(6000)).await;
        let snap = handle.snapshot();
        assert_eq!(snap.progress, 0.0);
        assert_eq!(snap.step_index, 0);
        assert_eq!(snap.cycle, 1);
        assert!(snap.logs.last().unwrap().contains("RESTARTING"));

        let restarts = snap.logs.iter().filter(|l| l.contains("SEQUENCE_COMPLETE")).count();
        assert_eq!(restarts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_logged_once_per_cycle() {
        let mut handle = mount(quiet_config()).await;
        run_for(&mut handle, Duration::from_millis(6000)).await;
        let logs = handle.snapshot().logs;
        let done = done_lines(&logs);
        assert_eq!(done.len(), 4);
        for (line, step) in done.iter().zip(["BOOT", "LOAD", "LINK", "SYNC"]) {
            assert!(line.ends_with(&format!("> {step}... DONE")), "{line}");
        }
        assert!(logs[0].ends_with("> SYSTEM_INIT..."));
        assert!(logs[1].ends_with("> CONNECTION_ESTABLISHED"));

        // Second cycle logs the same steps again, not the sentinel
        run_for(&mut handle, Duration::from_millis(1500)).await;
        let logs = handle.snapshot().logs;
        assert!(logs.last().unwrap().ends_with("> BOOT... DONE"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_log_stamps_increase() {
        let config = PanelConfig::default().with_noise_log_probability(1.0);
        let mut handle = mount(config).await;
        run_for(&mut handle, Duration::from_millis(2000)).await;
        let logs = handle.snapshot().logs;
        assert_eq!(logs.len(), 8);
        let stamps: Vec<f64> = logs
            .iter()
            .map(|l| l.split(" > ").next().unwrap().parse().unwrap())
            .collect();
        for pair in stamps.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_noise_updates_header() {
        let config = quiet_config().with_thread_resample_probability(1.0);
        let mut handle = mount(config).await;
        let before = handle.snapshot();
        assert_eq!(before.mem_addr, "0X2477");

        // Nothing before the first 120ms tick
        run_for(&mut handle, Duration::from_millis(100)).await;
        assert_eq!(handle.snapshot().thread_count, 4);

        run_for(&mut handle, Duration::from_millis(40)).await;
        let after = handle.snapshot();
        assert!(after.mem_addr.starts_with("0X"));
        assert_eq!(after.mem_addr.len(), 6);
        assert!((2..=13).contains(&after.thread_count));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_freezes_state() {
        let config = PanelConfig::default().with_noise_log_probability(1.0);
        let mut handle = mount(config).await;
        run_for(&mut handle, Duration::from_millis(1000)).await;

        handle.unmount().await.unwrap();
        assert!(!handle.is_mounted());
        let frozen = handle.snapshot();

        for _ in 0..100 {
            tokio::time::advance(Duration::from_millis(100)).await;
            settle().await;
            assert!(!handle.sync());
        }
        assert_eq!(handle.snapshot(), frozen);

        // Second unmount is harmless
        handle.unmount().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_names_panicked_task() {
        let mut handle = mount(quiet_config()).await;
        handle.spawn("exploder", async {
            panic!("boom");
        });
        settle().await;

        match handle.unmount().await {
            Err(Error::TaskFailed { task, reason }) => {
                assert_eq!(task, "exploder");
                assert!(reason.contains("panic"), "{reason}");
            }
            other => panic!("expected TaskFailed, got {other:?}"),
        }
        assert!(!handle.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_tasks() {
        let handle = mount(quiet_config()).await;
        let token = handle.cancel.clone();
        drop(handle);
        assert!(token.is_cancelled());
    }
}
