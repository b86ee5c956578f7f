//! Event validation: identifier recomputation and signature verification.
//!
//! Received events carry their own `id` and `sig`. Neither is trusted until
//! the id has been re-derived from the fields and the signature checked
//! against the author's key.

use crate::crypto::{PublicKey, Signature};
use crate::error::{CoreError, Result};
use crate::event::Event;
use crate::types::EventId;

/// Re-derive the event id and check it matches the stored one.
pub fn validate_event_id(event: &Event) -> Result<EventId> {
    let computed = EventId::from_commitment(&event.commitment()?);
    if computed.to_hex() != event.id() {
        return Err(CoreError::IdMismatch {
            expected: computed.to_hex(),
            actual: event.id().to_string(),
        });
    }
    Ok(computed)
}

/// Validate an event's identity and signature.
///
/// This performs:
/// - Id recomputation from the commitment
/// - Public key parsing (x-only, on curve)
/// - Schnorr signature verification over the id
pub fn validate_event(event: &Event) -> Result<()> {
    let id = validate_event_id(event)?;

    let author = PublicKey::from_hex(&event.pubkey).map_err(|_| CoreError::InvalidPublicKey)?;
    let signature = Signature::from_hex(event.sig()).map_err(|_| CoreError::InvalidSignature)?;

    author.verify(&id, &signature)
}
