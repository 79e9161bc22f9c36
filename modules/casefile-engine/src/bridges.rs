//! Production implementations of the engine seams.

use anyhow::Result;
use async_trait::async_trait;

use ai_client::{Claude, Message};
use casefile_common::{ChatMessage, ChatRole};
use lighthouse_client::LighthouseClient;

use crate::traits::{ContentStore, TextGenerator};
use crate::GENERATION_STEP_BUDGET;

#[async_trait]
impl TextGenerator for Claude {
    async fn generate(&self, system: &str, transcript: &[ChatMessage]) -> Result<String> {
        let messages = transcript
            .iter()
            .map(|m| match m.role {
                ChatRole::User => Message::user(&m.content),
                ChatRole::Assistant => Message::assistant(&m.content),
            })
            .collect();

        let text = self
            .prompt("")
            .preamble(system)
            .messages(messages)
            .max_steps(GENERATION_STEP_BUDGET)
            .send()
            .await?;

        Ok(text)
    }
}

#[async_trait]
impl ContentStore for LighthouseClient {
    async fn put_text(&self, payload: &str, name: &str) -> Result<String> {
        Ok(self.upload_text(payload, name).await?)
    }
}
