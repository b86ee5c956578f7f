//! Proof-of-work scoring.
//!
//! The score of a digest is the number of leading zero bits, scanning from the
//! most significant bit of the first byte. It is only a comparable difficulty
//! metric and carries no further cryptographic meaning.

/// Count leading zero bits of a big-endian byte string.
pub fn leading_zero_bits(bytes: &[u8]) -> u32 {
    let mut total = 0;
    for &b in bytes {
        if b == 0 {
            total += 8;
            continue;
        }
        total += b.leading_zeros();
        break;
    }
    total
}
