//! Mining loop and its worker handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use quill_core::Event;
use tokio::task::JoinHandle;

use crate::error::{MinerError, Result};

/// Largest meaningful target: every bit of a SHA-256 digest is zero.
pub const MAX_DIFFICULTY: u32 = 256;

/// Configuration for a mining run.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Required leading zero bits of the event id.
    pub target_difficulty: u32,
    /// Give up after this long (None = run until found or stopped).
    pub timeout: Option<Duration>,
    /// First nonce value to try.
    pub start_nonce: u64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            target_difficulty: 16,
            timeout: Some(Duration::from_secs(30)),
            start_nonce: 0,
        }
    }
}

/// Why a mining run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiningOutcome {
    /// The event id meets the target.
    Found,
    /// Stop was requested.
    Stopped,
    /// The timeout elapsed.
    TimedOut,
    /// Every nonce from `start_nonce` to `u64::MAX` was tried.
    Exhausted,
}

/// Result of a mining run.
#[derive(Debug, Clone)]
pub struct MiningReport {
    /// The event, with its id consistent with its fields.
    pub event: Event,
    pub outcome: MiningOutcome,
    /// Number of nonces tried.
    pub attempts: u64,
    pub elapsed: Duration,
}

impl MiningReport {
    /// Whether the target was reached.
    pub fn is_found(&self) -> bool {
        self.outcome == MiningOutcome::Found
    }
}

/// Mine synchronously on the current thread.
///
/// `stop` and the deadline are checked before every attempt.
pub fn mine(mut event: Event, config: &MinerConfig, stop: &AtomicBool) -> Result<MiningReport> {
    let target = config.target_difficulty;
    if target > MAX_DIFFICULTY {
        return Err(MinerError::TargetOutOfRange(target));
    }

    let started = Instant::now();
    let deadline = config.timeout.and_then(|t| started.checked_add(t));

    // Adding the nonce tag changes the id; keep it consistent even if we
    // stop before the first attempt.
    event.ensure_nonce_tag();
    event.recompute_identity()?;

    tracing::debug!(
        target_difficulty = target,
        start_nonce = config.start_nonce,
        "mining started"
    );

    let mut attempts = 0u64;
    let mut nonce = config.start_nonce;
    let outcome = loop {
        if stop.load(Ordering::Relaxed) {
            break MiningOutcome::Stopped;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break MiningOutcome::TimedOut;
        }

        event.set_nonce(nonce);
        let id = event.recompute_identity()?;
        attempts += 1;

        if id.difficulty() >= target {
            break MiningOutcome::Found;
        }

        nonce = match nonce.checked_add(1) {
            Some(next) => next,
            None => break MiningOutcome::Exhausted,
        };
    };

    let elapsed = started.elapsed();
    tracing::info!(
        ?outcome,
        attempts,
        pow = event.pow(),
        elapsed_ms = elapsed.as_millis() as u64,
        "mining finished"
    );

    Ok(MiningReport {
        event,
        outcome,
        attempts,
        elapsed,
    })
}

/// A mining run on a tokio blocking worker.
///
/// The event is moved into the worker, so nothing else can read or write it
/// until [`MiningTask::join`] hands it back.
pub struct MiningTask {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<Result<MiningReport>>,
}

impl MiningTask {
    /// Start mining. Must be called from within a tokio runtime.
    pub fn start(event: Event, config: MinerConfig) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = tokio::task::spawn_blocking(move || mine(event, &config, &flag));
        Self { stop, handle }
    }

    /// Ask the worker to stop after its current attempt.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and return its report.
    pub async fn join(self) -> Result<MiningReport> {
        self.handle
            .await
            .map_err(|e| MinerError::WorkerPanicked(e.to_string()))?
    }
}
