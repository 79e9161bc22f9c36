//! Trait seams for the two external collaborators.
//!
//! TextGenerator — the generative backend behind both narrative expansion
//!   and suspect dialogue.
//! ContentStore — the content-addressed store a public case is published to.
//!
//! These enable deterministic testing with ScriptedGenerator and MemoryStore:
//! no network, no credentials. `cargo test` in seconds.

use anyhow::Result;
use async_trait::async_trait;

use casefile_common::ChatMessage;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce the next assistant turn for `transcript` under the `system`
    /// instruction. One call may spend several model/tool steps internally,
    /// bounded by the implementation's step budget.
    async fn generate(&self, system: &str, transcript: &[ChatMessage]) -> Result<String>;
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a text payload under `name`, returning its content identifier.
    async fn put_text(&self, payload: &str, name: &str) -> Result<String>;
}
