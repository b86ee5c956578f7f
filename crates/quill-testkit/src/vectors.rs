//! Golden test vectors for deterministic verification.
//!
//! These vectors ensure that the commitment, id and signature produced for an
//! event are identical across all implementations. All vectors are authored
//! by the BIP-340 test key `0x..03` and signed with all-zero auxiliary
//! randomness.

use quill_core::{codec, sign_id, Event, EventBuilder, EventId, Kind, SecretKey};

/// Secret key of every vector's author.
pub const VECTOR_SECRET_KEY: &str =
    "0000000000000000000000000000000000000000000000000000000000000003";

/// Public key of every vector's author.
pub const VECTOR_PUBKEY: &str = "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Unix seconds.
    pub created_at: i64,
    pub kind: u32,
    pub tags: &'static [&'static [&'static str]],
    pub content: &'static str,
    /// Expected commitment text.
    pub expected_commitment: &'static str,
    /// Expected event id (hex).
    pub expected_id: &'static str,
    /// Expected leading zero bits of the id.
    pub expected_pow: u32,
    /// Expected signature (hex) with all-zero auxiliary randomness.
    pub expected_sig: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "plain text note",
            created_at: 1_700_000_000,
            kind: 1,
            tags: &[],
            content: "hello nostr",
            expected_commitment: "[0,\"f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9\",1700000000,1,[],\"hello nostr\"]",
            expected_id: "5367088425c3b5aaa1b04f508282e2794e85ba0c372a82aced053cf03b663ce2",
            expected_pow: 1,
            expected_sig: "8c0f99669774ab1f037fda1854e8cc80719bbc075473b4b9a8ee545822f3406a4b3cf2e271ca65807c0da2079c56c485b871aac7aa0d833ae5b986e24c908110",
        },
        GoldenVector {
            name: "escapes, unicode and tags",
            created_at: 1_700_000_001,
            kind: 7,
            tags: &[&["e", "abc"], &["nonce", "42", "20"]],
            content: "quote \" back \\ nl \n tab \t bell \u{1} del \u{7f} slash / é 🎉",
            expected_commitment: "[0,\"f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9\",1700000001,7,[[\"e\",\"abc\"],[\"nonce\",\"42\",\"20\"]],\"quote \\\" back \\\\ nl \\n tab \\t bell \\u0001 del \u{7f} slash / é 🎉\"]",
            expected_id: "c50c70412811238f8150fdabe2d2a354f4297d2ec9c4cf8fbde0f51e750bd7f5",
            expected_pow: 0,
            expected_sig: "daaa322bf60d5fbb64abff9df3ed9958f605204329aeca27d4b744b587b4c98565f4b516ceb5116d56f7c42d076d9df6527699451e2e3bb7e58d50fde6b46c81",
        },
        GoldenVector {
            name: "zero timestamp, kind and content",
            created_at: 0,
            kind: 0,
            tags: &[],
            content: "",
            expected_commitment: "[0,\"f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9\",0,0,[],\"\"]",
            expected_id: "e37d3d8a5cd27629fd198d21819aedd901a0a84297c9d9259543e162891c72aa",
            expected_pow: 0,
            expected_sig: "2c21e52ecc55c151b3240bcd8b766a64ccc8165a0eab23f0096c1bde2ea86e741da264b5d4f8cd829ae7c82d88c6b90dc272894f11d40caeaf92591eeb938699",
        },
        GoldenVector {
            name: "negative timestamp and empty tag",
            created_at: -1,
            kind: 65535,
            tags: &[&["t", "news"], &[]],
            content: "neg",
            expected_commitment: "[0,\"f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9\",-1,65535,[[\"t\",\"news\"],[]],\"neg\"]",
            expected_id: "5fb3c9b816df2ca623ba84cff477c8df10228fd7e6404fad0c773ea1b8bf3e74",
            expected_pow: 1,
            expected_sig: "c5ca38e89c9ffcbf2f22f3f9aa05786f547b6722cc0b390dfa19fb8aa7fd550543db17c5ba092f430ca188d691e5a3fbabb0a6f030b7f1d8f52e1a0a7aec7936",
        },
    ]
}

/// Build the (unsigned) event described by a vector.
pub fn event_from_vector(vector: &GoldenVector) -> Event {
    let tags = vector
        .tags
        .iter()
        .map(|t| t.iter().map(|s| s.to_string()).collect())
        .collect();

    EventBuilder::new(VECTOR_PUBKEY)
        .created_at(vector.created_at)
        .kind(Kind(vector.kind))
        .tags(tags)
        .content(vector.content)
        .build()
        .expect("vector events always serialize")
}

/// Sign a vector's id with all-zero auxiliary randomness.
pub fn signature_for_vector(vector: &GoldenVector) -> String {
    let key = SecretKey::from_hex(VECTOR_SECRET_KEY).expect("vector key is valid");
    let id = EventId::from_hex(vector.expected_id).expect("vector id is valid hex");
    sign_id(&key, &id, &[0u8; 32])
        .expect("signing a vector id succeeds")
        .to_hex()
}

/// Check every vector against this implementation.
///
/// Returns `(name, matches, computed_id)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let event = event_from_vector(v);
            let commitment = event.commitment().unwrap_or_default();

            let matches = commitment == v.expected_commitment.as_bytes()
                && event.id() == v.expected_id
                && event.pow() == Some(v.expected_pow)
                && signature_for_vector(v) == v.expected_sig;

            (v.name.to_string(), matches, event.id().to_string())
        })
        .collect()
}

/// Export the vectors as JSON for other implementations.
pub fn vectors_json() -> serde_json::Value {
    let vectors: Vec<serde_json::Value> = all_vectors()
        .iter()
        .map(|v| {
            serde_json::json!({
                "name": v.name,
                "secret_key": VECTOR_SECRET_KEY,
                "pubkey": VECTOR_PUBKEY,
                "created_at": v.created_at,
                "kind": v.kind,
                "tags": v.tags,
                "content": v.content,
                "commitment_hex": codec::encode(v.expected_commitment),
                "id": v.expected_id,
                "pow": v.expected_pow,
                "aux_rand": codec::encode([0u8; 32]),
                "sig": v.expected_sig,
            })
        })
        .collect();
    serde_json::Value::Array(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, id) in verify_all_vectors() {
            assert!(matches, "vector '{}' mismatched (computed id {})", name, id);
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            let e1 = event_from_vector(&vector);
            let e2 = event_from_vector(&vector);

            assert_eq!(
                e1.id(),
                e2.id(),
                "vector '{}' produced different ids on regeneration",
                vector.name
            );
            assert_eq!(
                e1.commitment().unwrap(),
                e2.commitment().unwrap(),
                "vector '{}' produced different commitments",
                vector.name
            );
        }
    }

    #[test]
    fn test_vector_signatures_verify() {
        for vector in all_vectors() {
            let json = serde_json::json!({
                "id": vector.expected_id,
                "pubkey": VECTOR_PUBKEY,
                "created_at": vector.created_at,
                "kind": vector.kind,
                "tags": vector.tags,
                "content": vector.content,
                "sig": vector.expected_sig,
            });
            let event = quill_core::decode_event(&json.to_string()).unwrap();
            event.verify().unwrap();
            assert_eq!(event.pow(), Some(vector.expected_pow));
        }
    }

    #[test]
    fn test_export_contains_every_vector() {
        let exported = vectors_json();
        let arr = exported.as_array().unwrap();
        assert_eq!(arr.len(), all_vectors().len());
        assert_eq!(arr[0]["commitment_hex"].as_str().unwrap().len() % 2, 0);
        assert_eq!(
            hex::decode(arr[0]["commitment_hex"].as_str().unwrap()).unwrap(),
            all_vectors()[0].expected_commitment.as_bytes()
        );
    }
}
