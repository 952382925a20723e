//! Panel events
//!
//! Messages the timing tasks send to the reducer.

use std::time::Duration;

/// Progress published by the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressUpdate {
    /// Progress in `[0, 100)`
    pub value: f64,
    /// Completed cycles; changes exactly when progress wraps
    pub cycle: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Progress(ProgressUpdate),
    /// Log line to be stamped with `at` (time since mount)
    Log { at: Duration, message: String },
    MemAddr(String),
    ThreadCount(u8),
}
