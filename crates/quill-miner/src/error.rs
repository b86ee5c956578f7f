//! Error types for the miner.

use thiserror::Error;

/// Errors that can occur while mining.
#[derive(Debug, Error)]
pub enum MinerError {
    /// Recomputing the event identity failed.
    #[error("core error: {0}")]
    Core(#[from] quill_core::CoreError),

    /// Target difficulty above the digest width.
    #[error("target difficulty {0} exceeds 256 bits")]
    TargetOutOfRange(u32),

    /// The blocking worker panicked or was aborted.
    #[error("mining worker failed: {0}")]
    WorkerPanicked(String),
}

/// Result type for miner operations.
pub type Result<T> = std::result::Result<T, MinerError>;
