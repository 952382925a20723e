//! Cosmetic telemetry noise
//!
//! Each tick resamples the displayed memory address, sometimes resamples the
//! thread count, and sometimes produces a chatter line for the log.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::PanelConfig;
use crate::data::THREAD_COUNT_RANGE;

/// What one noise tick produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseTick {
    /// Chatter line without timestamp, e.g. `MEM_READ_0x1F2E`
    pub log: Option<String>,
    /// New memory address, e.g. `0X2477`
    pub mem_addr: String,
    pub thread_count: Option<u8>,
}

pub struct NoiseGenerator<R> {
    rng: R,
    ops: Arc<[String]>,
    log_probability: f64,
    thread_probability: f64,
}

impl<R: Rng> NoiseGenerator<R> {
    /// Generator using the op tags and probabilities from a validated config
    pub fn new(rng: R, config: &PanelConfig) -> Self {
        Self {
            rng,
            ops: Arc::clone(config.noise_ops()),
            log_probability: config.noise_log_probability,
            thread_probability: config.thread_resample_probability,
        }
    }

    pub fn tick(&mut self) -> NoiseTick {
        let log = if self.rng.gen_bool(self.log_probability) {
            let hex = hex4(&mut self.rng);
            self.ops
                .choose(&mut self.rng)
                .map(|op| format!("MEM_{op}_0x{hex}"))
        } else {
            None
        };

        let mem_addr = format!("0X{}", hex4(&mut self.rng));

        let thread_count = self
            .rng
            .gen_bool(self.thread_probability)
            .then(|| self.rng.gen_range(THREAD_COUNT_RANGE));

        NoiseTick {
            log,
            mem_addr,
            thread_count,
        }
    }
}

/// Four uppercase hex digits
fn hex4<R: Rng>(rng: &mut R) -> String {
    format!("{:04X}", rng.gen::<u16>())
}
