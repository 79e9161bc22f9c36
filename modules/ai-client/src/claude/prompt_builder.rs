use tracing::debug;

use crate::error::{AiError, Result};
use crate::message::{Message, MessageRole};

use super::types::*;
use super::Claude;

/// One prompt against one model, sent with [`ClaudePromptBuilder::send`].
///
/// Each round-trip to the model is one step. A request that keeps asking for
/// tool calls past `max_steps` fails with [`AiError::StepBudget`] instead of
/// looping forever.
pub struct ClaudePromptBuilder {
    agent: Claude,
    input: String,
    preamble: Option<String>,
    temperature: Option<f32>,
    max_steps: usize,
    messages: Vec<Message>,
}

impl ClaudePromptBuilder {
    pub(crate) fn new(agent: Claude, input: String) -> Self {
        Self {
            agent,
            input,
            preamble: None,
            temperature: None,
            max_steps: 1,
            messages: Vec::new(),
        }
    }

    /// System instruction for the request.
    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap on model round-trips, tool executions included.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Prior conversation turns, oldest first.
    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub async fn send(self) -> Result<String> {
        let client = self.agent.client();

        let mut request = ChatRequest::new(&self.agent.model);

        if let Some(temp) = self.temperature {
            request = request.temperature(temp);
        }

        if let Some(ref preamble) = self.preamble {
            request = request.system(preamble);
        }

        let mut messages = Vec::new();
        for msg in &self.messages {
            match msg.role {
                MessageRole::User => messages.push(WireMessage::user(&msg.content)),
                MessageRole::Assistant => messages.push(WireMessage::assistant(&msg.content)),
            }
        }

        if !self.input.is_empty() {
            messages.push(WireMessage::user(&self.input));
        }

        request = request.messages(messages);

        for tool in &self.agent.tools {
            let def = tool.definition().await;
            request = request.tool(ToolDefinitionWire {
                name: def.name,
                description: def.description,
                input_schema: def.parameters,
            });
        }

        if request.tools.is_some() {
            request.tool_choice = Some(serde_json::json!({"type": "auto"}));
        }

        let mut step = 0;
        loop {
            step += 1;
            if step > self.max_steps {
                return Err(AiError::StepBudget(self.max_steps));
            }

            let response = client.chat(&request).await?;

            let tool_uses = response.tool_uses();
            if !tool_uses.is_empty() && response.stop_reason.as_deref() == Some("tool_use") {
                request
                    .messages
                    .push(WireMessage::assistant_blocks(response.content.clone()));

                let mut results = Vec::new();
                for block in &tool_uses {
                    if let ContentBlock::ToolUse { id, name, input } = block {
                        let tool = self
                            .agent
                            .tools
                            .iter()
                            .find(|t| t.name() == name.as_str())
                            .ok_or_else(|| AiError::ToolNotFound(name.clone()))?;

                        debug!(tool = %name, step, "Executing tool call");

                        let result = match tool.call_json(input.clone()).await {
                            Ok(v) => serde_json::to_string(&v)?,
                            Err(e) => format!("Error: {}", e),
                        };

                        results.push(ContentBlock::ToolResult {
                            tool_use_id: id.clone(),
                            content: result,
                        });
                    }
                }

                request.messages.push(WireMessage::tool_results(results));
                continue;
            }

            return response.text().ok_or(AiError::EmptyResponse);
        }
    }
}
