//! Step completion tracking
//!
//! Remembers the last step index seen so each completed step is reported
//! once. After a cycle reset the cursor sits on a sentinel ("before step 0")
//! and the first index observed is adopted silently.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTracker {
    /// `None` is the sentinel
    cursor: Option<usize>,
}

impl StepTracker {
    /// Tracker for a freshly mounted panel, positioned on step 0
    pub fn new() -> Self {
        Self { cursor: Some(0) }
    }

    /// Move back to the sentinel, called when the sequencer wraps
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Feed the current step index.
    ///
    /// Returns the steps that finished since the last observation, usually
    /// zero or one. Several are returned when progress skipped a step
    /// between two observations.
    pub fn observe(&mut self, index: usize) -> Range<usize> {
        match self.cursor {
            Some(cursor) if index > cursor => {
                self.cursor = Some(index);
                cursor..index
            }
            Some(cursor) => cursor..cursor,
            None => {
                self.cursor = Some(index);
                index..index
            }
        }
    }
}

impl Default for StepTracker {
    fn default() -> Self {
        Self::new()
    }
}
