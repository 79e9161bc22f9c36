//! Narrative expansion: seed in, validated full case narrative out.

use std::sync::Arc;

use tracing::{info, warn};

use ai_client::strip_code_blocks;
use casefile_common::{CaseFileError, CaseNarrative, CaseSeed, ChatMessage, Result};

use crate::prompts;
use crate::seed::SUSPECT_COUNT;
use crate::traits::TextGenerator;

/// Admission phrasing that must never appear in the public text fields.
/// A best-effort string check; the hard guarantee is the type split.
const GUILT_ADMISSION_MARKERS: &[&str] = &["i did it", "i am guilty", "confessed to the crime"];

pub struct Expander {
    generator: Arc<dyn TextGenerator>,
}

impl Expander {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Expand a seed into a full narrative. Parse or contract failures are
    /// [`CaseFileError::MalformedNarrative`]; the broken output is never
    /// patched, the caller decides whether to retry with a fresh call.
    pub async fn expand(&self, seed: &CaseSeed) -> Result<CaseNarrative> {
        let system = prompts::case_generation_prompt(seed);
        let seed_json = serde_json::to_string(seed)
            .map_err(|e| CaseFileError::MalformedNarrative(format!("unserializable seed: {e}")))?;

        let raw = self
            .generator
            .generate(&system, &[ChatMessage::user(format!("Seed: {seed_json}"))])
            .await?;

        let span = extract_json_span(strip_code_blocks(&raw)).ok_or_else(|| {
            warn!("Model response contained no JSON object");
            CaseFileError::MalformedNarrative("no JSON object in model response".to_string())
        })?;

        let narrative: CaseNarrative = serde_json::from_str(span).map_err(|e| {
            warn!(error = %e, "Model JSON did not match the narrative shape");
            CaseFileError::MalformedNarrative(format!("response does not match case shape: {e}"))
        })?;

        validate_narrative(&narrative)?;

        info!(title = %narrative.title, "Expanded case narrative");
        Ok(narrative)
    }
}

/// First top-level `{...}` span of the text, tolerating commentary the model
/// wraps around the JSON.
pub(crate) fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

/// Enforce the narrative contract after parsing.
pub fn validate_narrative(narrative: &CaseNarrative) -> Result<()> {
    if narrative.suspects.len() != SUSPECT_COUNT {
        return malformed(format!(
            "expected {SUSPECT_COUNT} suspects, got {}",
            narrative.suspects.len()
        ));
    }

    for (i, suspect) in narrative.suspects.iter().enumerate() {
        if suspect.id.trim().is_empty() {
            return malformed(format!("suspect {i} has an empty id"));
        }
        if narrative
            .suspects
            .iter()
            .filter(|other| other.id == suspect.id)
            .count()
            > 1
        {
            return malformed(format!("duplicate suspect id {}", suspect.id));
        }

        if !is_personal_name(&suspect.name, &suspect.occupation) {
            return malformed(format!(
                "suspect {} name {:?} is not a plausible personal name",
                suspect.id, suspect.name
            ));
        }

        let expected_image = format!("/assets/suspects/{}.png", i + 1);
        if suspect.image != expected_image {
            return malformed(format!(
                "suspect {} image {:?}, expected {expected_image:?}",
                suspect.id, suspect.image
            ));
        }
    }

    if !narrative
        .suspects
        .iter()
        .any(|s| s.id == narrative.guilty_suspect_id)
    {
        return malformed(format!(
            "guiltySuspectId {:?} matches no suspect",
            narrative.guilty_suspect_id
        ));
    }

    if narrative.crimestory.trim().is_empty() {
        return malformed("crimestory is empty".to_string());
    }

    let public_text = std::iter::once(narrative.title.as_str())
        .chain(std::iter::once(narrative.excerpt.as_str()))
        .chain(std::iter::once(narrative.story.as_str()))
        .chain(narrative.hints.iter().map(String::as_str));
    for text in public_text {
        let lowered = text.to_lowercase();
        if let Some(marker) = GUILT_ADMISSION_MARKERS
            .iter()
            .find(|m| lowered.contains(**m))
        {
            return malformed(format!("public field contains guilt admission {marker:?}"));
        }
    }

    Ok(())
}

/// A plausible full personal name: at least two words, not the occupation,
/// and not a role title ("The Curator").
fn is_personal_name(name: &str, occupation: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || name.split_whitespace().count() < 2 {
        return false;
    }
    if name.eq_ignore_ascii_case(occupation) {
        return false;
    }
    let mut words = name.split_whitespace();
    if words.next().is_some_and(|w| w.eq_ignore_ascii_case("the")) {
        return false;
    }
    true
}

fn malformed(message: String) -> Result<()> {
    warn!(%message, "Narrative failed validation");
    Err(CaseFileError::MalformedNarrative(message))
}
