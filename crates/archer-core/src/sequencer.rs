//! Progress sequencer
//!
//! Ramps progress from 0 towards 100 over one cycle duration, then wraps
//! back to 0. The sequencer is a plain state machine fed with "time since
//! mount"; the task in [`crate::panel`] supplies the clock.

use std::time::Duration;

/// Outcome of one sequencer tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still inside the cycle, carrying the new progress value
    Advanced(f64),
    /// The cycle finished; progress is back at 0
    Restarted,
}

#[derive(Debug, Clone)]
pub struct ProgressSequencer {
    duration: Duration,
    cycle_start: Duration,
    cycle: u64,
    progress: f64,
}

impl ProgressSequencer {
    /// Start a sequencer whose first cycle begins at `start`
    pub fn new(duration: Duration, start: Duration) -> Self {
        Self {
            duration,
            cycle_start: start,
            cycle: 0,
            progress: 0.0,
        }
    }

    pub fn tick(&mut self, now: Duration) -> Tick {
        let elapsed = now.saturating_sub(self.cycle_start);
        let value = elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64 * 100.0;

        if value >= 100.0 {
            self.cycle_start = now;
            self.cycle += 1;
            self.progress = 0.0;
            tracing::debug!(cycle = self.cycle, "Sequence complete, restarting");
            Tick::Restarted
        } else {
            self.progress = value;
            Tick::Advanced(value)
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Number of completed cycles
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

/// Step index for a progress value: `floor(progress / 100 * steps)`, clamped
/// to the last step.
pub fn step_index(progress: f64, step_count: usize) -> usize {
    scaled_floor(progress, step_count).min(step_count.saturating_sub(1))
}

/// Number of filled bar segments for a progress value
pub fn filled_segments(progress: f64, segment_count: usize) -> usize {
    scaled_floor(progress, segment_count).min(segment_count)
}

fn scaled_floor(progress: f64, count: usize) -> usize {
    let scaled = (progress / 100.0 * count as f64).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        scaled as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLE: Duration = Duration::from_millis(6000);

    #[test]
    fn test_progress_tracks_elapsed() {
        let mut seq = ProgressSequencer::new(CYCLE, Duration::ZERO);
        for ms in (0..6000).step_by(30) {
            let tick = seq.tick(Duration::from_millis(ms));
            let expected = ms as f64 / 6000.0 * 100.0;
            match tick {
                Tick::Advanced(value) => {
                    assert!((0.0..100.0).contains(&value));
                    assert!((value - expected).abs() < 1e-9, "at {ms}ms: {value}");
                }
                Tick::Restarted => panic!("restarted early at {ms}ms"),
            }
        }
    }

    #[test]
    fn test_restart_at_full_cycle() {
        let mut seq = ProgressSequencer::new(CYCLE, Duration::ZERO);
        assert_eq!(seq.tick(Duration::from_millis(5970)), Tick::Advanced(99.5));
        assert_eq!(seq.tick(Duration::from_millis(6000)), Tick::Restarted);
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.cycle(), 1);

        // Next cycle is measured from the restart instant
        assert_eq!(seq.tick(Duration::from_millis(9000)), Tick::Advanced(50.0));
    }

    #[test]
    fn test_restart_when_overshooting() {
        let mut seq = ProgressSequencer::new(CYCLE, Duration::ZERO);
        assert_eq!(seq.tick(Duration::from_millis(7500)), Tick::Restarted);
        assert_eq!(seq.tick(Duration::from_millis(7500)), Tick::Advanced(0.0));
    }

    #[test]
    fn test_step_index() {
        assert_eq!(step_index(0.0, 5), 0);
        assert_eq!(step_index(19.9, 5), 0);
        assert_eq!(step_index(20.0, 5), 1);
        assert_eq!(step_index(50.0, 5), 2);
        assert_eq!(step_index(99.99, 5), 4);
        assert_eq!(step_index(100.0, 5), 4);
        assert_eq!(step_index(-3.0, 5), 0);
    }

    #[test]
    fn test_step_index_monotonic_and_covering() {
        let mut seen = Vec::new();
        let mut last = 0;
        let mut p = 0.0;
        while p < 100.0 {
            let idx = step_index(p, 8);
            assert!(idx >= last);
            if seen.last() != Some(&idx) {
                seen.push(idx);
            }
            last = idx;
            p += 0.5;
        }
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_filled_segments() {
        assert_eq!(filled_segments(0.0, 60), 0);
        assert_eq!(filled_segments(50.0, 60), 30);
        assert_eq!(filled_segments(99.9, 60), 59);
        assert_eq!(filled_segments(100.0, 60), 60);
    }
}
