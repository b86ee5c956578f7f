//! Cross-implementation vectors for commitments, ids and signatures.
//!
//! Every implementation of the event format must produce identical
//! commitment bytes and ids for these inputs. Signatures are pinned with
//! fixed auxiliary randomness.

use quill_core::{codec, commitment, sign_id, EventBuilder, EventId, Kind, SecretKey};

const SECKEY: &str = "0000000000000000000000000000000000000000000000000000000000000003";
const PUBKEY: &str = "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

struct Vector {
    name: &'static str,
    created_at: i64,
    kind: u32,
    tags: &'static [&'static [&'static str]],
    content: &'static str,
    id: &'static str,
    pow: u32,
}

fn vectors() -> Vec<Vector> {
    vec![
        Vector {
            name: "plain text note",
            created_at: 1_700_000_000,
            kind: 1,
            tags: &[],
            content: "hello nostr",
            id: "5367088425c3b5aaa1b04f508282e2794e85ba0c372a82aced053cf03b663ce2",
            pow: 1,
        },
        Vector {
            name: "escapes, unicode and tags",
            created_at: 1_700_000_001,
            kind: 7,
            tags: &[&["e", "abc"], &["nonce", "42", "20"]],
            content: "quote \" back \\ nl \n tab \t bell \u{1} del \u{7f} slash / é 🎉",
            id: "c50c70412811238f8150fdabe2d2a354f4297d2ec9c4cf8fbde0f51e750bd7f5",
            pow: 0,
        },
        Vector {
            name: "zero everything",
            created_at: 0,
            kind: 0,
            tags: &[],
            content: "",
            id: "e37d3d8a5cd27629fd198d21819aedd901a0a84297c9d9259543e162891c72aa",
            pow: 0,
        },
        Vector {
            name: "negative timestamp and empty tag",
            created_at: -1,
            kind: 65535,
            tags: &[&["t", "news"], &[]],
            content: "neg",
            id: "5fb3c9b816df2ca623ba84cff477c8df10228fd7e6404fad0c773ea1b8bf3e74",
            pow: 1,
        },
    ]
}

fn owned_tags(tags: &[&[&str]]) -> Vec<Vec<String>> {
    tags.iter()
        .map(|t| t.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_vector_ids() {
    for v in vectors() {
        let event = EventBuilder::new(PUBKEY)
            .created_at(v.created_at)
            .kind(Kind(v.kind))
            .tags(owned_tags(v.tags))
            .content(v.content)
            .build()
            .unwrap();

        assert_eq!(event.id(), v.id, "vector '{}' id", v.name);
        assert_eq!(event.pow(), Some(v.pow), "vector '{}' pow", v.name);
    }
}

#[test]
fn test_escaping_vector_bytes() {
    let v = &vectors()[1];
    let bytes = commitment(PUBKEY, v.created_at, Kind(v.kind), &owned_tags(v.tags), v.content)
        .unwrap();

    let expected = "5b302c2266393330386130313932353863333130343933343466383566383964353232\
                    396235333163383435383336663939623038363031663131336263653033366639222c\
                    313730303030303030312c372c5b5b2265222c22616263225d2c5b226e6f6e6365222c\
                    223432222c223230225d5d2c2271756f7465205c22206261636b205c5c206e6c205c6e\
                    20746162205c742062656c6c205c75303030312064656c207f20736c617368202f20c3\
                    a920f09f8e89225d";
    assert_eq!(codec::encode(&bytes), expected);
    assert_eq!(EventId::from_commitment(&bytes).to_hex(), v.id);
}

#[test]
fn test_signature_vector() {
    let key = SecretKey::from_hex(SECKEY).unwrap();
    assert_eq!(key.public_key().to_hex(), PUBKEY);

    let id = EventId::from_hex(vectors()[0].id).unwrap();
    let sig = sign_id(&key, &id, &[0u8; 32]).unwrap();
    assert_eq!(
        sig.to_hex(),
        "8c0f99669774ab1f037fda1854e8cc80719bbc075473b4b9a8ee545822f3406a\
         4b3cf2e271ca65807c0da2079c56c485b871aac7aa0d833ae5b986e24c908110"
    );
}

#[test]
fn test_uppercase_id_parses_to_same_bytes() {
    let v = &vectors()[0];
    let upper = EventId::from_hex(&v.id.to_uppercase()).unwrap();
    assert_eq!(upper.to_hex(), v.id);
}
