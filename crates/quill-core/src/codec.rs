//! Byte/hex codec and the secure randomness boundary.
//!
//! Every hex string this crate produces is lowercase, unprefixed and exactly
//! two characters per byte. Decoding accepts either case.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::Result;

/// Encode bytes as lowercase hex.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string of any case.
///
/// Fails on odd length or on any character outside `[0-9a-fA-F]`.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

/// Decode a hex string into a fixed-size array.
pub fn decode_array<const N: usize>(s: &str) -> Result<[u8; N]> {
    let mut arr = [0u8; N];
    hex::decode_to_slice(s, &mut arr)?;
    Ok(arr)
}

/// Fill an array from a cryptographically secure source.
pub fn random_bytes<const N: usize, R: RngCore + CryptoRng>(rng: &mut R) -> [u8; N] {
    let mut buf = [0u8; N];
    rng.fill_bytes(&mut buf);
    buf
}

/// Fresh auxiliary randomness for a single signing operation, from the OS.
pub fn aux_rand() -> [u8; 32] {
    random_bytes(&mut OsRng)
}

/// Check that `s` is exactly `len` bytes of lowercase hex.
pub fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len * 2 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
