//! Canonical event commitment.
//!
//! The commitment is the exact byte sequence whose SHA-256 is the event id:
//!
//! ```text
//! [0,<pubkey>,<created_at>,<kind>,<tags>,<content>]
//! ```
//!
//! - Compact JSON: no whitespace between tokens
//! - Integers in plain decimal, no exponent or fraction
//! - Strings escape only `"`, `\` and C0 control characters (`\b \f \n \r \t`
//!   by name, the rest as lowercase `\u00xx`); `/`, DEL and all non-ASCII
//!   text pass through as raw UTF-8
//!
//! This is exactly what `serde_json`'s compact writer emits, so the array is
//! serialized through it rather than formatted by hand. Any change here breaks
//! identifier agreement with every other implementation.

use crate::error::{CoreError, Result};
use crate::kind::Kind;

/// Fixed first element of the commitment array.
const COMMITMENT_PREAMBLE: u8 = 0;

/// Build the canonical commitment bytes for the identity-relevant fields.
pub fn commitment(
    pubkey: &str,
    created_at: i64,
    kind: Kind,
    tags: &[Vec<String>],
    content: &str,
) -> Result<Vec<u8>> {
    let value = (COMMITMENT_PREAMBLE, pubkey, created_at, kind, tags, content);
    serde_json::to_vec(&value).map_err(|e| CoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|t| t.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_minimal_commitment() {
        let bytes = commitment("abc", 1_000_000_000, Kind(1), &[], "hi").unwrap();
        assert_eq!(bytes, br#"[0,"abc",1000000000,1,[],"hi"]"#);
    }

    #[test]
    fn test_tags_preserve_order() {
        let t = tags(&[&["p", "bb"], &["e", "aa", "wss://relay"], &[]]);
        let bytes = commitment("k", 5, Kind(7), &t, "+").unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[0,"k",5,7,[["p","bb"],["e","aa","wss://relay"],[]],"+"]"#
        );
    }

    #[test]
    fn test_string_escaping_convention() {
        let content = "q\" b\\ n\n r\r t\t bs\u{8} ff\u{c} x\u{1} y\u{1f} del\u{7f} / é 🎉";
        let bytes = commitment("k", 0, Kind(1), &[], content).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "[0,\"k\",0,1,[],\"q\\\" b\\\\ n\\n r\\r t\\t bs\\b ff\\f x\\u0001 y\\u001f del\u{7f} / é 🎉\"]"
        );
    }

    #[test]
    fn test_tag_elements_are_escaped() {
        let t = tags(&[&["t", "a\"b"]]);
        let bytes = commitment("k", 0, Kind(1), &t, "").unwrap();
        assert_eq!(bytes, br#"[0,"k",0,1,[["t","a\"b"]],""]"#);
    }

    #[test]
    fn test_negative_timestamp() {
        let bytes = commitment("k", -1, Kind(65535), &[], "").unwrap();
        assert_eq!(bytes, br#"[0,"k",-1,65535,[],""]"#);
    }

    #[test]
    fn test_commitment_deterministic() {
        let t = tags(&[&["nonce", "1"]]);
        let a = commitment("k", 10, Kind(1), &t, "x").unwrap();
        let b = commitment("k", 10, Kind(1), &t, "x").unwrap();
        assert_eq!(a, b);
    }
}
