//! Archer Core - timing engine for the Archer loading panel
//!
//! Drives a decorative terminal widget: a progress ramp that loops every
//! cycle, a log of completed steps, and cosmetic memory/thread noise.
//! Rendering lives in the `archer` binary; this crate only produces
//! [`PanelSnapshot`]s.

pub mod config;
pub mod data;
pub mod error;
pub mod log_buffer;
pub mod noise;
pub mod panel;
pub mod sequencer;
pub mod steps;
pub mod timestamp;

pub use config::PanelConfig;
pub use error::{Error, Result};
pub use panel::{Panel, PanelHandle, PanelSnapshot};
