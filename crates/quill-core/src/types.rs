//! Strong type definitions for Quill Core.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::codec;
use crate::error::Result;
use crate::pow::leading_zero_bits;

/// A 32-byte event identifier, computed as SHA-256(commitment(event)).
///
/// This is the content-address of an event. Two events with the same
/// pubkey, timestamp, kind, tags and content have the same EventId.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub [u8; 32]);

impl EventId {
    /// Hash a commitment into an identifier.
    pub fn from_commitment(commitment: &[u8]) -> Self {
        Self(Sha256::digest(commitment).into())
    }

    /// Create a new EventId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        codec::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(codec::decode_array(s)?))
    }

    /// Leading zero bits of the digest (the proof-of-work score).
    pub fn difficulty(&self) -> u32 {
        leading_zero_bits(&self.0)
    }

    /// The zero event ID (used as a sentinel).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for EventId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EventId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for EventId {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> std::result::Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}
