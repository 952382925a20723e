//! Static data tables and timing constants
//!
//! Everything here is compiled in. `PanelConfig::default()` is built from
//! these values; tests swap in their own tables through the config builder.

use std::ops::RangeInclusive;
use std::time::Duration;

/// One full 0 -> 100 ramp
pub const CYCLE_DURATION: Duration = Duration::from_millis(6000);

/// Sampling interval of the progress sequencer
pub const SEQUENCER_INTERVAL: Duration = Duration::from_millis(30);

/// Sampling interval of the noise generator
pub const NOISE_INTERVAL: Duration = Duration::from_millis(120);

/// Segments in the progress bar
pub const SEGMENT_COUNT: usize = 60;

/// Lines retained by the log pane
pub const LOG_CAPACITY: usize = 8;

/// Chance per noise tick of appending a chatter line
pub const NOISE_LOG_PROBABILITY: f64 = 0.3;

/// Chance per noise tick of resampling the thread count
pub const THREAD_RESAMPLE_PROBABILITY: f64 = 0.05;

/// Range the thread count is resampled from
pub const THREAD_COUNT_RANGE: RangeInclusive<u8> = 2..=13;

pub const INITIAL_MEM_ADDR: &str = "0X2477";
pub const INITIAL_THREAD_COUNT: u8 = 4;

/// Lines the log pane shows before the first tick
pub const BOOT_LINES: &[&str] = &["SYSTEM_INIT...", "CONNECTION_ESTABLISHED"];

pub const RESTART_MESSAGE: &str = "SEQUENCE_COMPLETE... RESTARTING";

/// Status labels, in the order the sequencer walks through them
pub const LOADING_STEPS: &[&str] = &[
    "Initializing core modules",
    "Allocating memory blocks",
    "Handshaking with exchange",
    "Verifying cryptographic keys",
    "Syncing order book",
    "Calibrating price feeds",
    "Compiling market shaders",
    "Finalizing secure channel",
];

/// Operation tags used by the noise generator
pub const NOISE_OPS: &[&str] = &["ALLOC", "READ", "WRITE", "SYNC", "PING"];
