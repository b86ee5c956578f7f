//! # Quill Testkit
//!
//! Testing utilities for Quill.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known events with expected commitments and ids for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic signers for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use quill_testkit::vectors::{all_vectors, event_from_vector};
//!
//! for vector in all_vectors() {
//!     let event = event_from_vector(&vector);
//!     assert_eq!(event.id(), vector.expected_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use quill_testkit::generators::{EventParams, event_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn id_is_deterministic(params: EventParams) {
//!         let e1 = event_from_params(&params);
//!         let e2 = event_from_params(&params);
//!         prop_assert_eq!(e1.id(), e2.id());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use quill_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let event = fixture.make_note("hello");
//! event.verify().unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{event_from_params, EventParams};
pub use vectors::{all_vectors, event_from_vector, verify_all_vectors, GoldenVector};
