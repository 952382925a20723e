//! Panel state reducer
//!
//! Sole owner of the panel's view state. Events from the timing tasks are
//! applied here, in arrival order, and snapshots are taken from here.

use std::sync::Arc;
use std::time::Duration;

use super::events::{PanelEvent, ProgressUpdate};
use crate::config::PanelConfig;
use crate::data::{BOOT_LINES, INITIAL_MEM_ADDR, INITIAL_THREAD_COUNT};
use crate::log_buffer::LogBuffer;
use crate::sequencer::{filled_segments, step_index};
use crate::timestamp::TimestampFormatter;

/// Everything a frame needs to draw the panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub progress: f64,
    pub cycle: u64,
    pub step_index: usize,
    pub step_label: String,
    pub filled_segments: usize,
    pub segment_count: usize,
    /// Oldest first
    pub logs: Vec<String>,
    pub mem_addr: String,
    pub thread_count: u8,
}

impl PanelSnapshot {
    /// Whole percent shown next to the step label
    pub fn percent(&self) -> u8 {
        self.progress.floor().clamp(0.0, 99.0) as u8
    }
}

#[derive(Debug)]
pub struct PanelState {
    steps: Arc<[String]>,
    segment_count: usize,
    progress: ProgressUpdate,
    logs: LogBuffer,
    timestamps: TimestampFormatter,
    mem_addr: String,
    thread_count: u8,
}

impl PanelState {
    /// Initial state, with the boot lines already in the log
    pub fn new(config: &PanelConfig) -> Self {
        let mut state = Self {
            steps: Arc::clone(config.steps()),
            segment_count: config.segment_count,
            progress: ProgressUpdate::default(),
            logs: LogBuffer::new(config.log_capacity),
            timestamps: TimestampFormatter::new(),
            mem_addr: INITIAL_MEM_ADDR.to_string(),
            thread_count: INITIAL_THREAD_COUNT,
        };
        for line in BOOT_LINES {
            state.push_log(Duration::ZERO, line);
        }
        state
    }

    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Progress(update) => self.progress = update,
            PanelEvent::Log { at, message } => self.push_log(at, &message),
            PanelEvent::MemAddr(addr) => self.mem_addr = addr,
            PanelEvent::ThreadCount(count) => self.thread_count = count,
        }
    }

    fn push_log(&mut self, at: Duration, message: &str) {
        let stamp = self.timestamps.stamp(at);
        self.logs.append(format!("{stamp} > {message}"));
    }

    pub fn progress(&self) -> f64 {
        self.progress.value
    }

    pub fn step_index(&self) -> usize {
        step_index(self.progress.value, self.steps.len())
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        let step_index = self.step_index();
        PanelSnapshot {
            progress: self.progress.value,
            cycle: self.progress.cycle,
            step_index,
            step_label: self.steps.get(step_index).cloned().unwrap_or_default(),
            filled_segments: filled_segments(self.progress.value, self.segment_count),
            segment_count: self.segment_count,
            logs: self.logs.iter().map(str::to_owned).collect(),
            mem_addr: self.mem_addr.clone(),
            thread_count: self.thread_count,
        }
    }
}
