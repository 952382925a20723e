//! Panel configuration
//!
//! Timing and data tables for one mounted panel. The defaults are the
//! compiled-in constants from [`crate::data`]; nothing here is read from
//! the environment.

use std::sync::Arc;
use std::time::Duration;

use crate::data;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub cycle_duration: Duration,
    pub sequencer_interval: Duration,
    pub noise_interval: Duration,
    pub segment_count: usize,
    pub log_capacity: usize,
    pub noise_log_probability: f64,
    pub thread_resample_probability: f64,
    steps: Arc<[String]>,
    noise_ops: Arc<[String]>,
}

impl PanelConfig {
    /// Replace the step labels
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the noise operation tags
    pub fn with_noise_ops<I, S>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_ops = ops.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_noise_log_probability(mut self, probability: f64) -> Self {
        self.noise_log_probability = probability;
        self
    }

    pub fn with_thread_resample_probability(mut self, probability: f64) -> Self {
        self.thread_resample_probability = probability;
        self
    }

    pub fn steps(&self) -> &Arc<[String]> {
        &self.steps
    }

    pub fn noise_ops(&self) -> &Arc<[String]> {
        &self.noise_ops
    }

    /// Check every value the engine relies on being non-degenerate
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(Error::InvalidConfig("step list is empty".into()));
        }
        if self.noise_ops.is_empty() {
            return Err(Error::InvalidConfig("noise operation list is empty".into()));
        }
        for (name, value) in [
            ("cycle_duration", self.cycle_duration),
            ("sequencer_interval", self.sequencer_interval),
            ("noise_interval", self.noise_interval),
        ] {
            if value.is_zero() {
                return Err(Error::InvalidConfig(format!("{name} must be non-zero")));
            }
        }
        if self.segment_count == 0 {
            return Err(Error::InvalidConfig("segment_count must be non-zero".into()));
        }
        if self.log_capacity == 0 {
            return Err(Error::InvalidConfig("log_capacity must be non-zero".into()));
        }
        for (name, p) in [
            ("noise_log_probability", self.noise_log_probability),
            ("thread_resample_probability", self.thread_resample_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within 0.0..=1.0, got {p}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            cycle_duration: data::CYCLE_DURATION,
            sequencer_interval: data::SEQUENCER_INTERVAL,
            noise_interval: data::NOISE_INTERVAL,
            segment_count: data::SEGMENT_COUNT,
            log_capacity: data::LOG_CAPACITY,
            noise_log_probability: data::NOISE_LOG_PROBABILITY,
            thread_resample_probability: data::THREAD_RESAMPLE_PROBABILITY,
            steps: data::LOADING_STEPS.iter().map(|s| s.to_string()).collect(),
            noise_ops: data::NOISE_OPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
