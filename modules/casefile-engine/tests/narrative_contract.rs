//! Narrative expansion contract tests.
//!
//! The expander is exercised against a scripted generator: what matters here
//! is the parse-and-validate path, not the model. Every rejection must be a
//! MalformedNarrative, and the broken output is never patched.

use std::sync::Arc;

use casefile_common::{CaseFileError, CaseNarrative};
use casefile_engine::seed::derive;
use casefile_engine::testing::{sample_narrative, ScriptedGenerator};
use casefile_engine::Expander;

fn expander_replying(reply: &str) -> Expander {
    Expander::new(Arc::new(ScriptedGenerator::new().reply(reply)))
}

fn narrative_json(narrative: &CaseNarrative) -> String {
    serde_json::to_string(narrative).unwrap()
}

async fn expand_json(narrative: &CaseNarrative) -> Result<CaseNarrative, CaseFileError> {
    let seed = derive(&[7, 2, 9, 0, 5, 1, 3]).unwrap();
    expander_replying(&narrative_json(narrative))
        .expand(&seed)
        .await
}

// =========================================================================
// Happy path
// =========================================================================

#[tokio::test]
async fn valid_json_with_commentary_parses() {
    let narrative = sample_narrative();
    let reply = format!(
        "Here is your case file:\n```json\n{}\n```\nHope that works!",
        narrative_json(&narrative)
    );
    let seed = derive(&[7, 2, 9, 0, 5, 1, 3]).unwrap();

    let expanded = expander_replying(&reply).expand(&seed).await.unwrap();
    assert_eq!(expanded, narrative);
}

#[tokio::test]
async fn system_prompt_withholds_seed_suspect_details() {
    let generator = Arc::new(
        ScriptedGenerator::new().reply(&narrative_json(&sample_narrative())),
    );
    let seed = derive(&[7, 2, 9, 0, 5, 1, 3]).unwrap();

    Expander::new(generator.clone()).expand(&seed).await.unwrap();

    let systems = generator.seen_systems();
    assert_eq!(systems.len(), 1);
    // occupation and gender go through; drawn traits stay out of the system prompt
    assert!(systems[0].contains("Finance Intern"));
    assert!(!systems[0].contains("risk-averse and reputation-conscious"));
}

// =========================================================================
// Contract rejections
// =========================================================================

#[tokio::test]
async fn guilty_id_must_match_a_suspect() {
    let mut narrative = sample_narrative();
    narrative.guilty_suspect_id = "s9".to_string();
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn exactly_three_suspects_required() {
    let mut narrative = sample_narrative();
    // guilty "s2" with only s1 and s3 remaining
    narrative.suspects.remove(1);
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn role_title_names_are_rejected() {
    let mut narrative = sample_narrative();
    narrative.suspects[1].name = "The IT Administrator".to_string();
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn images_must_follow_the_slot_order() {
    let mut narrative = sample_narrative();
    narrative.suspects.swap(0, 2);
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn duplicate_suspect_ids_are_rejected() {
    let mut narrative = sample_narrative();
    narrative.suspects[2].id = "s1".to_string();
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn empty_crimestory_is_rejected() {
    let mut narrative = sample_narrative();
    narrative.crimestory = "   ".to_string();
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn guilt_admission_in_public_story_is_rejected() {
    let mut narrative = sample_narrative();
    narrative.story.push_str(" Later the admin said: I did it.");
    assert!(matches!(
        expand_json(&narrative).await,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

// =========================================================================
// Parse failures
// =========================================================================

#[tokio::test]
async fn non_json_response_is_malformed() {
    let seed = derive(&[1, 2, 3]).unwrap();
    let result = expander_replying("I'd rather not produce a case today.")
        .expand(&seed)
        .await;
    assert!(matches!(
        result,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn json_with_wrong_shape_is_malformed() {
    let seed = derive(&[1, 2, 3]).unwrap();
    let result = expander_replying("{\"title\": 42}").expand(&seed).await;
    assert!(matches!(
        result,
        Err(CaseFileError::MalformedNarrative(_))
    ));
}

#[tokio::test]
async fn generator_failure_is_not_malformed() {
    let seed = derive(&[1, 2, 3]).unwrap();
    let expander = Expander::new(Arc::new(
        ScriptedGenerator::new().failure("backend timeout"),
    ));
    let result = expander.expand(&seed).await;
    // transport failures propagate as-is so the caller can tell them apart
    assert!(matches!(result, Err(CaseFileError::Anyhow(_))));
}
