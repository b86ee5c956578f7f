//! # Quill Core
//!
//! Pure primitives for Quill events: canonical commitments, content-addressed
//! identifiers, proof-of-work scoring and Schnorr signatures.
//!
//! This crate contains no I/O, no storage, no networking. The only side effect
//! is drawing auxiliary randomness when signing.
//!
//! ## Key Types
//!
//! - [`Event`] - A single protocol message, identified by a content hash
//! - [`EventId`] - SHA-256 of the event's canonical commitment
//! - [`SecretKey`] / [`PublicKey`] - secp256k1 keys (x-only public half)
//! - [`Signature`] - 64-byte BIP-340 Schnorr signature over an [`EventId`]
//!
//! ## Commitment
//!
//! The identifier preimage is the compact JSON array
//! `[0,pubkey,created_at,kind,tags,content]`. See [`commitment`].
//!
//! ## Identity is explicit
//!
//! Mutating an event's fields never updates its identifier on its own. Call
//! [`Event::recompute_identity`] before signing or publishing.

pub mod codec;
pub mod commitment;
pub mod crypto;
pub mod error;
pub mod event;
pub mod kind;
pub mod pow;
pub mod types;
pub mod validation;

pub use commitment::commitment;
pub use crypto::{sign_id, PublicKey, SecretKey, Signature};
pub use error::{CoreError, Result};
pub use event::{decode_event, Event, EventBuilder, Tag, NONCE_TAG};
pub use kind::Kind;
pub use pow::leading_zero_bits;
pub use types::EventId;
pub use validation::{validate_event, validate_event_id};
