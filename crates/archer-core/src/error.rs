//! Error types for the panel engine

use thiserror::Error;

/// Things that can go wrong while configuring or tearing down a panel
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid panel configuration: {0}")]
    InvalidConfig(String),

    #[error("panel task `{task}` failed: {reason}")]
    TaskFailed { task: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
