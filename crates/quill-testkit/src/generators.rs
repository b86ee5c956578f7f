//! Proptest generators for property-based testing.

use proptest::prelude::*;

use quill_core::{Event, EventBuilder, EventId, Kind, SecretKey, Tag};

/// Generate a valid secret key.
pub fn secret_key() -> impl Strategy<Value = SecretKey> {
    any::<[u8; 32]>().prop_filter_map("not a valid scalar", |seed| {
        SecretKey::from_bytes(&seed).ok()
    })
}

/// Generate a random EventId.
pub fn event_id() -> impl Strategy<Value = EventId> {
    any::<[u8; 32]>().prop_map(EventId::from_bytes)
}

/// Generate an x-only public key as hex.
pub fn pubkey_hex() -> impl Strategy<Value = String> {
    secret_key().prop_map(|key| key.public_key().to_hex())
}

/// Generate a timestamp, negative values included.
pub fn created_at() -> impl Strategy<Value = i64> {
    prop_oneof![
        0i64..=2_000_000_000i64,
        Just(i64::MIN),
        Just(i64::MAX),
        -1_000i64..0i64,
    ]
}

/// Generate a kind.
pub fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::METADATA),
        Just(Kind::TEXT_NOTE),
        Just(Kind::REACTION),
        any::<u32>().prop_map(Kind),
    ]
}

/// Generate arbitrary Unicode content, control characters included.
pub fn content(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|chars| chars.into_iter().collect())
}

/// Generate a single tag.
pub fn tag() -> impl Strategy<Value = Tag> {
    prop::collection::vec(content(16), 0..=4)
}

/// Generate a tag list.
pub fn tags(max_len: usize) -> impl Strategy<Value = Vec<Tag>> {
    prop::collection::vec(tag(), 0..=max_len)
}

/// Parameters for generating an event.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub pubkey: String,
    pub created_at: i64,
    pub kind: Kind,
    pub tags: Vec<Tag>,
    pub content: String,
}

impl Arbitrary for EventParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (pubkey_hex(), created_at(), kind(), tags(6), content(200))
            .prop_map(|(pubkey, created_at, kind, tags, content)| EventParams {
                pubkey,
                created_at,
                kind,
                tags,
                content,
            })
            .boxed()
    }
}

/// Generate an event from parameters.
pub fn event_from_params(params: &EventParams) -> Event {
    EventBuilder::new(params.pubkey.clone())
        .created_at(params.created_at)
        .kind(params.kind)
        .tags(params.tags.clone())
        .content(params.content.clone())
        .build()
        .expect("generated events always serialize")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{codec, decode_event, validate_event_id};

    proptest! {
        #[test]
        fn test_event_id_deterministic(params: EventParams) {
            let e1 = event_from_params(&params);
            let e2 = event_from_params(&params);

            prop_assert_eq!(e1.id(), e2.id());
            prop_assert_eq!(e1.pow(), e2.pow());
        }

        #[test]
        fn test_id_is_lowercase_hex(params: EventParams) {
            let event = event_from_params(&params);
            prop_assert!(codec::is_lower_hex(event.id(), 32));
            prop_assert_eq!(event.pow(), Some(event.event_id().unwrap().difficulty()));
        }

        #[test]
        fn test_commitment_is_json_array(params: EventParams) {
            let event = event_from_params(&params);
            let bytes = event.commitment().unwrap();
            let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

            prop_assert_eq!(&parsed[0], &serde_json::json!(0));
            prop_assert_eq!(parsed[1].as_str().unwrap(), params.pubkey.as_str());
            prop_assert_eq!(parsed[2].as_i64().unwrap(), params.created_at);
            prop_assert_eq!(parsed[5].as_str().unwrap(), params.content.as_str());
            prop_assert!(!bytes.contains(&b'\n'));
        }

        #[test]
        fn test_content_change_changes_id(params: EventParams, suffix in "[a-z]{1,8}") {
            let mut event = event_from_params(&params);
            let before = event.id().to_string();

            event.content.push_str(&suffix);
            prop_assert_eq!(event.id(), before.as_str());

            event.recompute_identity().unwrap();
            prop_assert_ne!(event.id(), before.as_str());
        }

        #[test]
        fn test_signed_events_verify(params: EventParams, key in secret_key()) {
            let mut event = event_from_params(&params);
            event.pubkey = key.public_key().to_hex();
            event.recompute_identity().unwrap();
            event.sign(&key).unwrap();

            prop_assert!(codec::is_lower_hex(event.sig(), 64));
            prop_assert!(event.verify().is_ok());
        }

        #[test]
        fn test_wire_roundtrip_preserves_identity(params: EventParams) {
            let event = event_from_params(&params);
            let decoded = decode_event(&event.to_json().unwrap()).unwrap();

            prop_assert_eq!(&decoded, &event);
            prop_assert!(validate_event_id(&decoded).is_ok());
        }

        #[test]
        fn test_nonce_helper_idempotent(params: EventParams) {
            let mut event = event_from_params(&params);
            let first = event.ensure_nonce_tag();
            let len = event.tags.len();
            let second = event.ensure_nonce_tag();

            prop_assert_eq!(first, second);
            prop_assert_eq!(event.tags.len(), len);
        }
    }
}
