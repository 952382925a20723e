//! Log line timestamps
//!
//! A fake high-resolution clock: fixed offset plus time since mount, printed
//! with 7 fractional digits. Values are kept as integer 100ns ticks so the
//! formatting never goes through a float.

use std::time::Duration;

/// Seconds added to the time since mount
pub const TIMESTAMP_OFFSET_SECS: u64 = 176_354;

const TICKS_PER_SEC: u64 = 10_000_000;
const NANOS_PER_TICK: u128 = 100;

/// Stamps log lines, guaranteeing each stamp is greater than the previous one
#[derive(Debug, Default, Clone)]
pub struct TimestampFormatter {
    last_tick: Option<u64>,
}

impl TimestampFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the stamp for `since_mount`.
    ///
    /// Two stamps for the same (or an earlier) instant are separated by one
    /// tick so the sequence is strictly increasing.
    pub fn stamp(&mut self, since_mount: Duration) -> String {
        let mut tick = to_ticks(since_mount);
        if let Some(last) = self.last_tick {
            if tick <= last {
                tick = last.saturating_add(1);
            }
        }
        self.last_tick = Some(tick);
        format_ticks(tick)
    }
}

fn to_ticks(since_mount: Duration) -> u64 {
    let elapsed = u64::try_from(since_mount.as_nanos() / NANOS_PER_TICK).unwrap_or(u64::MAX);
    (TIMESTAMP_OFFSET_SECS * TICKS_PER_SEC).saturating_add(elapsed)
}

fn format_ticks(tick: u64) -> String {
    format!("{}.{:07}", tick / TICKS_PER_SEC, tick % TICKS_PER_SEC)
}
