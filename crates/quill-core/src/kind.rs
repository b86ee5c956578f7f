//! Event kinds.
//!
//! The kind is an open numeric category. Only a handful of well-known values
//! get names here; anything else round-trips untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of an event, determining how its content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kind(pub u32);

impl Kind {
    /// Profile metadata.
    pub const METADATA: Self = Self(0);
    /// Short text note.
    pub const TEXT_NOTE: Self = Self(1);
    pub const RECOMMEND_RELAY: Self = Self(2);
    pub const CONTACTS: Self = Self(3);
    /// Encrypted direct message.
    pub const ENCRYPTED_DM: Self = Self(4);
    pub const DELETE: Self = Self(5);
    pub const REPOST: Self = Self(6);
    pub const REACTION: Self = Self(7);

    /// Get the raw value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::TEXT_NOTE
    }
}

impl From<u32> for Kind {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text_note() {
        assert_eq!(Kind::default(), Kind::TEXT_NOTE);
        assert_eq!(Kind::TEXT_NOTE.as_u32(), 1);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Kind::REACTION).unwrap(), "7");
        let k: Kind = serde_json::from_str("30023").unwrap();
        assert_eq!(k, Kind(30023));
    }
}
