//! Event: a single signed protocol message.
//!
//! An event's identity (`id` and the cached proof-of-work score) is derived
//! from its pubkey, timestamp, kind, tags and content. Those five fields are
//! public and freely mutable; the derived fields are private and only change
//! through [`Event::recompute_identity`]. Editing a field and forgetting to
//! recompute leaves the old id in place.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec;
use crate::commitment::commitment;
use crate::crypto::{sign_id, SecretKey};
use crate::error::{CoreError, Result};
use crate::kind::Kind;
use crate::types::EventId;
use crate::validation::validate_event;

/// A tag: an ordered list of strings, meaningful by position.
///
/// The first element names the tag (`e`, `p`, `t`, `nonce`, ...) and the rest
/// carry its data. Unknown tags are kept verbatim.
pub type Tag = Vec<String>;

/// Name of the tag carrying the proof-of-work nonce.
pub const NONCE_TAG: &str = "nonce";

/// A protocol event.
///
/// ```json
/// {
///   "id": "5367088425c3b5aaa1b04f508282e2794e85ba0c372a82aced053cf03b663ce2",
///   "pubkey": "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
///   "created_at": 1700000000,
///   "kind": 1,
///   "tags": [],
///   "content": "hello nostr",
///   "sig": "8c0f9966..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Hex SHA-256 of the commitment.
    id: String,

    /// Author's x-only public key (hex).
    pub pubkey: String,

    /// Unix timestamp in seconds.
    pub created_at: i64,

    /// Event kind.
    pub kind: Kind,

    /// Tags, order preserved.
    pub tags: Vec<Tag>,

    /// Content, unescaped.
    pub content: String,

    /// Hex Schnorr signature over `id`; empty until signed.
    sig: String,

    /// Cached leading-zero-bit count of `id`.
    #[serde(skip)]
    pow: Option<u32>,
}

impl Event {
    /// Create an event stamped with the current time and compute its id.
    pub fn new(
        content: impl Into<String>,
        pubkey: impl Into<String>,
        kind: Kind,
        tags: Vec<Tag>,
    ) -> Result<Self> {
        EventBuilder::new(pubkey)
            .kind(kind)
            .tags(tags)
            .content(content)
            .created_at(now_secs())
            .build()
    }

    /// The current identifier (64 hex chars), as of the last recompute.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The signature (128 hex chars), or empty if unsigned.
    pub fn sig(&self) -> &str {
        &self.sig
    }

    /// Cached proof-of-work score of the current identifier.
    pub fn pow(&self) -> Option<u32> {
        self.pow
    }

    /// Whether a signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.sig.is_empty()
    }

    /// Parse the stored identifier.
    pub fn event_id(&self) -> Result<EventId> {
        EventId::from_hex(&self.id)
    }

    /// Canonical commitment bytes for the current field values.
    pub fn commitment(&self) -> Result<Vec<u8>> {
        commitment(
            &self.pubkey,
            self.created_at,
            self.kind,
            &self.tags,
            &self.content,
        )
    }

    /// Recompute `id` and `pow` from the current fields.
    ///
    /// On failure neither field is touched.
    pub fn recompute_identity(&mut self) -> Result<EventId> {
        let id = EventId::from_commitment(&self.commitment()?);
        self.id = id.to_hex();
        self.pow = Some(id.difficulty());
        tracing::trace!(id = %self.id, pow = id.difficulty(), "recomputed event identity");
        Ok(id)
    }

    /// Index of the nonce tag, appending `["nonce", "0"]` if there is none.
    ///
    /// Only a tag of exactly two elements whose first element is `nonce`
    /// counts.
    pub fn ensure_nonce_tag(&mut self) -> usize {
        if let Some(index) = self
            .tags
            .iter()
            .position(|tag| tag.len() == 2 && tag[0] == NONCE_TAG)
        {
            return index;
        }

        self.tags.push(vec![NONCE_TAG.to_string(), "0".to_string()]);
        self.tags.len() - 1
    }

    /// Write `nonce` into the nonce tag in place and return the tag's index.
    ///
    /// Does not recompute the identity.
    pub fn set_nonce(&mut self, nonce: u64) -> usize {
        let index = self.ensure_nonce_tag();
        self.tags[index][1] = nonce.to_string();
        index
    }

    /// Current nonce value, if a well-formed nonce tag is present.
    pub fn nonce(&self) -> Option<u64> {
        self.tags
            .iter()
            .find(|tag| tag.len() == 2 && tag[0] == NONCE_TAG)
            .and_then(|tag| tag[1].parse().ok())
    }

    /// Sign the current id with fresh OS randomness.
    pub fn sign(&mut self, key: &SecretKey) -> Result<()> {
        self.sign_with_aux(key, &codec::aux_rand())
    }

    /// Sign the current id, drawing auxiliary randomness from `rng`.
    ///
    /// The id is not recomputed: call [`Event::recompute_identity`] first if
    /// any field changed. On failure the previous signature is kept.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        &mut self,
        key: &SecretKey,
        rng: &mut R,
    ) -> Result<()> {
        self.sign_with_aux(key, &codec::random_bytes(rng))
    }

    fn sign_with_aux(&mut self, key: &SecretKey, aux: &[u8; 32]) -> Result<()> {
        let id = EventId::from_hex(&self.id)
            .map_err(|e| CoreError::Signing(format!("event has no valid id: {}", e)))?;
        let signature = sign_id(key, &id, aux)?;

        self.sig = signature.to_hex();
        tracing::debug!(id = %self.id, "signed event");
        Ok(())
    }

    /// Sign with a hex-encoded secret key.
    pub fn sign_hex(&mut self, secret_key: &str) -> Result<()> {
        let key = SecretKey::from_hex(secret_key)?;
        self.sign(&key)
    }

    /// Check the id against the fields and the signature against the pubkey.
    pub fn verify(&self) -> Result<()> {
        validate_event(self)
    }

    /// Compact wire JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}

/// Decode an event from wire JSON.
///
/// Returns `None` on malformed input. The received id is trusted for the
/// proof-of-work score but is not recomputed; use [`crate::validate_event`] for that.
pub fn decode_event(text: &str) -> Option<Event> {
    let mut event: Event = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode event");
            return None;
        }
    };
    event.pow = EventId::from_hex(&event.id).ok().map(|id| id.difficulty());
    Some(event)
}

/// Builder for creating events.
pub struct EventBuilder {
    pubkey: String,
    created_at: i64,
    kind: Kind,
    tags: Vec<Tag>,
    content: String,
}

impl EventBuilder {
    /// Start building an event for an author.
    pub fn new(pubkey: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            created_at: 0,
            kind: Kind::TEXT_NOTE,
            tags: Vec::new(),
            content: String::new(),
        }
    }

    /// Set the timestamp (Unix seconds).
    pub fn created_at(mut self, ts: i64) -> Self {
        self.created_at = ts;
        self
    }

    /// Set the kind.
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a tag.
    pub fn tag<I, S>(mut self, tag: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.push(tag.into_iter().map(Into::into).collect());
        self
    }

    /// Replace all tags.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Build the event and compute its identity.
    pub fn build(self) -> Result<Event> {
        let mut event = Event {
            id: String::new(),
            pubkey: self.pubkey,
            created_at: self.created_at,
            kind: self.kind,
            tags: self.tags,
            content: self.content,
            sig: String::new(),
            pow: None,
        };
        event.recompute_identity()?;
        Ok(event)
    }

    /// Build, identify and sign in one step.
    pub fn sign(self, key: &SecretKey) -> Result<Event> {
        let mut event = self.build()?;
        event.sign(key)?;
        Ok(event)
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
