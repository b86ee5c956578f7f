//! # Quill Miner
//!
//! Proof-of-work mining for Quill events.
//!
//! ## Overview
//!
//! Mining searches for a nonce tag value that gives the event an id with at
//! least `target_difficulty` leading zero bits. Each attempt writes the nonce
//! into the event's `["nonce", "<n>"]` tag, recomputes the identity and reads
//! the proof-of-work score.
//!
//! The search runs on a dedicated blocking worker and stops on success, on
//! request, on timeout, or when the nonce space is exhausted. In every case
//! the event handed back has an id consistent with its fields.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quill_core::EventBuilder;
//! use quill_miner::{MinerConfig, MiningTask};
//!
//! async fn example() {
//!     let event = EventBuilder::new("f9308a01...").content("gm").build().unwrap();
//!
//!     let config = MinerConfig { target_difficulty: 20, ..Default::default() };
//!     let task = MiningTask::start(event, config);
//!
//!     // task.request_stop();
//!     let report = task.join().await.unwrap();
//!     println!("{:?} after {} attempts", report.outcome, report.attempts);
//! }
//! ```

pub mod error;
pub mod worker;

pub use error::{MinerError, Result};
pub use worker::{mine, MinerConfig, MiningOutcome, MiningReport, MiningTask, MAX_DIFFICULTY};
