//! Test mocks for the engine seams.
//!
//! Two mocks matching the two trait boundaries:
//! - ScriptedGenerator (TextGenerator) — queue of canned replies
//! - MemoryStore (ContentStore) — in-memory writes with a fail switch
//!
//! Plus helpers for constructing valid narratives.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use casefile_common::{CaseNarrative, ChatMessage, Gender, Suspect};

use crate::traits::{ContentStore, TextGenerator};

// ---------------------------------------------------------------------------
// ScriptedGenerator
// ---------------------------------------------------------------------------

/// Queue-backed generator. Each call pops the next scripted reply; a call
/// with an empty queue fails. Builder pattern: `.reply()`, `.failure()`.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    seen_systems: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            seen_systems: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn failure(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// System prompts seen so far, in call order.
    pub fn seen_systems(&self) -> Vec<String> {
        self.seen_systems.lock().unwrap().clone()
    }
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, system: &str, _transcript: &[ChatMessage]) -> Result<String> {
        self.seen_systems.lock().unwrap().push(system.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => bail!(message),
            None => bail!("no scripted reply left"),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory content store. Returns a CID-shaped identifier per write and
/// records every payload for assertions.
pub struct MemoryStore {
    writes: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A store whose every write fails, as an unreachable backend would.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .last()
            .map(|(_, payload)| payload.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn put_text(&self, payload: &str, name: &str) -> Result<String> {
        if self.fail {
            bail!("store unreachable");
        }
        let mut writes = self.writes.lock().unwrap();
        writes.push((name.to_string(), payload.to_string()));
        Ok(format!("QmTestCid{:04}", writes.len()))
    }
}

// ---------------------------------------------------------------------------
// Narrative helpers
// ---------------------------------------------------------------------------

pub fn sample_suspects() -> Vec<Suspect> {
    vec![
        Suspect {
            id: "s1".to_string(),
            name: "Evelyn Hart".to_string(),
            description: Some("Holds final sign-off on audits.".to_string()),
            age: 49,
            occupation: "CFO".to_string(),
            image: "/assets/suspects/1.png".to_string(),
            gender: Gender::F,
            traits: vec![
                "measured and formal".to_string(),
                "risk-averse and reputation-conscious".to_string(),
            ],
            mannerisms: vec![
                "speaks in concise, polished statements".to_string(),
                "rarely uses contractions".to_string(),
            ],
        },
        Suspect {
            id: "s2".to_string(),
            name: "Marcus Chen".to_string(),
            description: Some("Migrated the vault to token-only access.".to_string()),
            age: 38,
            occupation: "IT Administrator".to_string(),
            image: "/assets/suspects/2.png".to_string(),
            gender: Gender::M,
            traits: vec![
                "technically precise and procedural".to_string(),
                "defensive about best practices".to_string(),
            ],
            mannerisms: vec![
                "uses technical jargon and references logs".to_string(),
                "corrects small inaccuracies".to_string(),
            ],
        },
        Suspect {
            id: "s3".to_string(),
            name: "Ava Patel".to_string(),
            description: Some("Assisted with formatting exports.".to_string()),
            age: 23,
            occupation: "Finance Intern".to_string(),
            image: "/assets/suspects/3.png".to_string(),
            gender: Gender::F,
            traits: vec![
                "eager to please".to_string(),
                "admits uncertainty rather than risk being wrong".to_string(),
            ],
            mannerisms: vec![
                "uses filler like 'um' and 'I think'".to_string(),
                "apologizes when challenged".to_string(),
            ],
        },
    ]
}

/// A narrative that passes validation, with suspect `s2` guilty.
pub fn sample_narrative() -> CaseNarrative {
    CaseNarrative {
        id: "g1".to_string(),
        title: "The Missing Ledger at the Bank".to_string(),
        excerpt: "On audit eve, the master ledger vanished from the vault.".to_string(),
        story: "The finance team found the encrypted ledger missing minutes before audit prep. \
                No alarms fired, and access telemetry shows three user contexts touching the \
                vault this week."
            .to_string(),
        hints: vec![
            "A late-night VPN session overlaps the vault's access window.".to_string(),
            "One account's hardware token was re-enrolled this week.".to_string(),
            "The audit export job was requested but cancelled.".to_string(),
            "Checksum history shows the ledger was moved, not modified.".to_string(),
        ],
        suspects: sample_suspects(),
        guilty_suspect_id: "s2".to_string(),
        crimestory: "The re-enrolled hardware token belongs to the vault migration account. \
                     Its old token was never decommissioned, and the overlapping VPN session \
                     originated from the admin subnet at 02:14, inside the access window."
            .to_string(),
    }
}
