//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use quill_core::{Event, EventBuilder, Kind, PublicKey, SecretKey, Tag};
use quill_miner::{mine, MinerConfig, MiningReport};
use std::sync::atomic::AtomicBool;

/// A test fixture holding an author's secret key.
pub struct TestFixture {
    pub key: SecretKey,
}

impl TestFixture {
    /// Create a new test fixture with a random key.
    pub fn new() -> Self {
        loop {
            let seed: [u8; 32] = rand::random();
            if let Ok(key) = SecretKey::from_bytes(&seed) {
                return Self { key };
            }
        }
    }

    /// Create with a deterministic key from seed.
    ///
    /// Panics if the seed is not a valid secret key.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SecretKey::from_bytes(&seed).expect("seed is a valid secret key"),
        }
    }

    /// The author's public key.
    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    /// A builder pre-filled with this author's pubkey and the current time.
    pub fn builder(&self) -> EventBuilder {
        EventBuilder::new(self.public_key().to_hex()).created_at(now_secs())
    }

    /// Create a signed text note.
    pub fn make_note(&self, content: &str) -> Event {
        self.builder()
            .content(content)
            .sign(&self.key)
            .expect("fixture events always sign")
    }

    /// Create a signed event of any kind.
    pub fn make_event(&self, kind: Kind, tags: Vec<Tag>, content: &str) -> Event {
        self.builder()
            .kind(kind)
            .tags(tags)
            .content(content)
            .sign(&self.key)
            .expect("fixture events always sign")
    }

    /// Create a reaction to another event.
    pub fn make_reaction(&self, target: &Event, content: &str) -> Event {
        let tags = vec![
            vec!["e".to_string(), target.id().to_string()],
            vec!["p".to_string(), target.pubkey.clone()],
        ];
        self.make_event(Kind::REACTION, tags, content)
    }

    /// Mine a note to `difficulty` bits, then sign it.
    pub fn make_mined_note(&self, content: &str, difficulty: u32) -> MiningReport {
        let event = self
            .builder()
            .content(content)
            .build()
            .expect("fixture events always serialize");
        let config = MinerConfig {
            target_difficulty: difficulty,
            timeout: None,
            start_nonce: 0,
        };

        let mut report =
            mine(event, &config, &AtomicBool::new(false)).expect("fixture mining succeeds");
        report
            .event
            .sign(&self.key)
            .expect("fixture events always sign");
        report
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[24..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// Get current time in Unix seconds.
fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}
