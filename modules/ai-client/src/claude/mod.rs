mod client;
pub mod prompt_builder;
pub(crate) mod types;

pub use prompt_builder::ClaudePromptBuilder;

use std::sync::Arc;

use crate::error::{AiError, Result};
use crate::tool::{DynTool, Tool, ToolWrapper};

use client::ClaudeClient;

// =============================================================================
// Claude Agent
// =============================================================================

/// Handle on one model. Cheap to clone; prompts are built per call with
/// [`Claude::prompt`].
#[derive(Clone)]
pub struct Claude {
    api_key: String,
    pub(crate) model: String,
    pub(crate) tools: Vec<Arc<dyn DynTool>>,
    base_url: Option<String>,
}

impl Claude {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            tools: Vec::new(),
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AiError::Config("ANTHROPIC_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key, model))
    }

    /// Point the client at a different endpoint. Tests use this to talk to a
    /// local stub instead of the real API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.push(Arc::new(ToolWrapper(tool)));
        self
    }

    pub fn dyn_tool(mut self, tool: Arc<dyn DynTool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self, input: impl Into<String>) -> ClaudePromptBuilder {
        ClaudePromptBuilder::new(self.clone(), input.into())
    }

    pub(crate) fn client(&self) -> ClaudeClient {
        let client = ClaudeClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}
