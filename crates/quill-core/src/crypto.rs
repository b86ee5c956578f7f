//! Cryptographic primitives for Quill.
//!
//! Wraps BIP-340 Schnorr signing over secp256k1 with strong types. Signatures
//! are always over the 32-byte event id, never over the raw commitment.

use secp256k1::{schnorr, All, Keypair, Message, Secp256k1, XOnlyPublicKey, SECP256K1};
use std::fmt;

use crate::codec;
use crate::error::{CoreError, Result};
use crate::types::EventId;

/// Shared verification/signing context.
fn secp() -> &'static Secp256k1<All> {
    SECP256K1
}

/// A 32-byte x-only secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Create from raw bytes.
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

    /// Verify a signature over an event id.
    pub fn verify(&self, id: &EventId, signature: &Signature) -> Result<()> {
        let key = XOnlyPublicKey::from_slice(&self.0).map_err(|_| CoreError::InvalidPublicKey)?;
        let sig =
            schnorr::Signature::from_slice(&signature.0).map_err(|_| CoreError::InvalidSignature)?;
        let message = Message::from_digest(id.0);

        secp()
            .verify_schnorr(&sig, &message, &key)
            .map_err(|_| CoreError::InvalidSignature)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 64-byte BIP-340 Schnorr signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
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
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

/// A secp256k1 secret key used for signing events.
///
/// The key is never stored on an event; it is passed to each signing call.
/// Key material is overwritten when the value is dropped.
#[derive(Clone)]
pub struct SecretKey {
    keypair: Keypair,
}

impl SecretKey {
    /// Parse a 32-byte secret key.
    ///
    /// Fails with [`CoreError::InvalidKey`] on wrong length, zero, or a value
    /// not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let keypair =
            Keypair::from_seckey_slice(secp(), bytes).map_err(|_| CoreError::InvalidKey)?;
        Ok(Self { keypair })
    }

    /// Parse a hex-encoded secret key.
    ///
    /// Malformed hex is reported as [`CoreError::InvalidKey`], not as a
    /// decode error, so callers see a single failure kind for bad keys.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = codec::decode(s).map_err(|_| CoreError::InvalidKey)?;
        let key = Self::from_bytes(&bytes);
        bytes.fill(0);
        key
    }

    /// Derive the x-only public key.
    pub fn public_key(&self) -> PublicKey {
        let (xonly, _parity) = self.keypair.x_only_public_key();
        PublicKey(xonly.serialize())
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.keypair.non_secure_erase();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({:?})", self.public_key())
    }
}

/// Sign an event id with caller-supplied auxiliary randomness.
///
/// `aux` must be fresh per call; reusing it does not leak the key under
/// BIP-340 but it does make signatures linkable.
pub fn sign_id(key: &SecretKey, id: &EventId, aux: &[u8; 32]) -> Result<Signature> {
    let message = Message::from_digest(id.0);
    let sig = secp().sign_schnorr_with_aux_rand(&message, &key.keypair, aux);

    // libsecp256k1 does not surface signing failures; catch them here.
    let signature = Signature(sig.serialize());
    key.public_key()
        .verify(id, &signature)
        .map_err(|e| CoreError::Signing(e.to_string()))?;
    Ok(signature)
}
