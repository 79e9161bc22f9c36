//! Case-file data model.
//!
//! The split between [`CaseNarrative`] and [`PublicCase`] is load-bearing:
//! the guilt fields exist only on the narrative, so a public case cannot
//! carry a guilt signal by construction. Wire names are camelCase to match
//! the published JSON shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    O,
}

/// One suspect slot in a derived seed. No name yet; names are invented by
/// the narrative expansion so they don't echo the occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSuspect {
    pub occupation: String,
    pub description: String,
    pub age: u8,
    pub image: String,
    pub gender: Gender,
    pub traits: Vec<String>,
    pub mannerisms: Vec<String>,
}

/// The structured draw of categorical choices that anchors a case before
/// narrative expansion. A pure function of its entropy input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSeed {
    pub title: String,
    pub excerpt: String,
    pub story: String,
    pub hints: Vec<String>,
    pub suspects: Vec<SeedSuspect>,
}

/// A fully-profiled suspect as produced by narrative expansion and consumed
/// by the dialogue agent. Immutable for the lifetime of one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub age: u8,
    pub occupation: String,
    pub image: String,
    pub gender: Gender,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub mannerisms: Vec<String>,
}

/// The fully expanded case, concealed guilt fields included. Never serialized
/// into any public payload; it is split by redaction first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseNarrative {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub story: String,
    pub hints: Vec<String>,
    pub suspects: Vec<Suspect>,
    #[serde(rename = "guiltySuspectId")]
    pub guilty_suspect_id: String,
    pub crimestory: String,
}

/// The guilt-free artifact. `id` holds the content identifier once the case
/// has been published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicCase {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub story: String,
    pub hints: Vec<String>,
    pub suspects: Vec<Suspect>,
}

impl PublicCase {
    pub fn suspect(&self, suspect_id: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id == suspect_id)
    }
}

/// Guilt identity and rationale, handed to the commitment mechanism exactly
/// once. `Debug` is masked so the record cannot leak through logging.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiltRecord {
    #[serde(rename = "guiltySuspectId")]
    pub guilty_suspect_id: String,
    pub crimestory: String,
}

impl std::fmt::Debug for GuiltRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuiltRecord")
            .field("guilty_suspect_id", &"<redacted>")
            .field("crimestory", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript turn of an interrogation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
