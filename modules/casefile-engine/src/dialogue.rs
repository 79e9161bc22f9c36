//! Persona-constrained suspect dialogue.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use casefile_common::{CaseFileError, ChatMessage, ChatRole, PublicCase, Result, Suspect};

use crate::prompts;
use crate::traits::TextGenerator;

/// Greeting injected client-side when an interrogation opens.
pub const OPENING_LINE: &str = "You think I did it? Ask your questions.";

/// In-character fallback when the backend rejects or errors. The dialogue
/// never surfaces a raw error to the transcript.
pub const REFUSAL_LINE: &str = "I have nothing to say right now.";

/// In-character fallback when the backend cannot be reached at all.
pub const THINKING_LINE: &str = "I need a moment to think...";

/// Soft cap the persona prompt imposes; responses over it are logged.
pub const RESPONSE_WORD_CAP: usize = 120;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

pub struct DialogueAgent {
    generator: Arc<dyn TextGenerator>,
}

impl DialogueAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Produce the suspect's next utterance for a running transcript.
    ///
    /// The transcript must end on a user turn: a suspect does not speak
    /// twice in a row, and cannot answer an empty interrogation.
    pub async fn respond(
        &self,
        case_file: &PublicCase,
        suspect: &Suspect,
        transcript: &[ChatMessage],
    ) -> Result<String> {
        match transcript.last() {
            Some(turn) if turn.role == ChatRole::User => {}
            Some(_) => {
                return Err(CaseFileError::InvalidRequest(
                    "transcript must end with a user turn".to_string(),
                ))
            }
            None => {
                return Err(CaseFileError::InvalidRequest(
                    "transcript is empty".to_string(),
                ))
            }
        }

        let system = prompts::suspect_prompt(case_file, suspect);
        let raw = self.generator.generate(&system, transcript).await?;
        let text = sanitize_plain_text(&raw);

        let words = text.split_whitespace().count();
        if words > RESPONSE_WORD_CAP {
            warn!(suspect = %suspect.id, words, "Suspect response exceeded the word cap");
        }

        Ok(text)
    }
}

/// Reduce raw model output to plain conversational text: markup-like tags
/// stripped, whitespace collapsed, enclosing quotes trimmed.
pub fn sanitize_plain_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    let normalized = WHITESPACE_RE.replace_all(&no_tags, " ");
    normalized
        .trim()
        .trim_matches(|c: char| {
            matches!(c, '\'' | '"' | '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}')
        })
        .to_string()
}
