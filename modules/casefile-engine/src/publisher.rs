//! Guilt redaction and publication.
//!
//! Redaction is a pure structural split: the narrative is destructured into
//! the guilt-free public case and the guilt record, nothing is rewritten.
//! Publication is at-most-once per narrative: an ambiguous store failure is
//! surfaced, never retried, so two uploads of the same case cannot exist.

use std::sync::Arc;

use tracing::info;

use casefile_common::{CaseFileError, CaseNarrative, GuiltRecord, PublicCase, Result};

use crate::expander::validate_narrative;
use crate::traits::ContentStore;

/// Wire keys reserved for guilt. The serialized public payload is checked
/// against these before any byte leaves the process.
const GUILT_KEYS: &[&str] = &["guiltySuspectId", "crimestory"];

/// Upload name for published cases.
const CASE_UPLOAD_NAME: &str = "case";

/// Split a narrative into its public artifact and guilt record.
pub fn redact(narrative: CaseNarrative) -> (PublicCase, GuiltRecord) {
    let CaseNarrative {
        id,
        title,
        excerpt,
        story,
        hints,
        suspects,
        guilty_suspect_id,
        crimestory,
    } = narrative;

    (
        PublicCase {
            id,
            title,
            excerpt,
            story,
            hints,
            suspects,
        },
        GuiltRecord {
            guilty_suspect_id,
            crimestory,
        },
    )
}

pub struct Publisher {
    store: Arc<dyn ContentStore>,
}

impl Publisher {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Validate, redact, and publish a narrative. On success the public
    /// case carries the store's content identifier as its id, and exactly
    /// one write has happened. On any failure no identifier is fabricated
    /// and the guilt record is not returned.
    pub async fn publish(&self, narrative: CaseNarrative) -> Result<(PublicCase, GuiltRecord)> {
        validate_narrative(&narrative)?;

        let (mut public_case, guilt) = redact(narrative);

        let payload = serde_json::to_string(&public_case).map_err(|e| {
            CaseFileError::PublicationFailed(format!("public case failed to serialize: {e}"))
        })?;
        ensure_no_guilt_signal(&payload, &guilt)?;

        let cid = self
            .store
            .put_text(&payload, CASE_UPLOAD_NAME)
            .await
            .map_err(|e| CaseFileError::PublicationFailed(e.to_string()))?;
        if cid.trim().is_empty() {
            return Err(CaseFileError::PublicationFailed(
                "store returned an empty content identifier".to_string(),
            ));
        }

        public_case.id = cid;
        info!(cid = %public_case.id, title = %public_case.title, "Published public case");

        Ok((public_case, guilt))
    }
}

/// Checked, not assumed: the serialized public payload must be byte-for-byte
/// free of the guilt keys and of the concealed rationale text.
fn ensure_no_guilt_signal(payload: &str, guilt: &GuiltRecord) -> Result<()> {
    for key in GUILT_KEYS {
        if payload.contains(key) {
            return Err(CaseFileError::PublicationFailed(format!(
                "public payload contains reserved key {key:?}"
            )));
        }
    }

    let crimestory = guilt.crimestory.trim();
    if !crimestory.is_empty() && payload.contains(crimestory) {
        return Err(CaseFileError::PublicationFailed(
            "public payload contains the concealed crime story".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_narrative;

    #[test]
    fn test_redact_is_a_pure_split() {
        let narrative = sample_narrative();
        let (public_case, guilt) = redact(narrative.clone());

        assert_eq!(public_case.id, narrative.id);
        assert_eq!(public_case.suspects, narrative.suspects);
        assert_eq!(guilt.guilty_suspect_id, narrative.guilty_suspect_id);
        assert_eq!(guilt.crimestory, narrative.crimestory);
    }

    #[test]
    fn test_redact_twice_yields_equal_pairs() {
        let narrative = sample_narrative();
        assert_eq!(redact(narrative.clone()), redact(narrative));
    }

    #[test]
    fn test_guilt_signal_check_catches_reserved_keys() {
        let guilt = GuiltRecord {
            guilty_suspect_id: "s2".to_string(),
            crimestory: "They moved the ledger at 02:14.".to_string(),
        };
        assert!(ensure_no_guilt_signal("{\"title\":\"x\"}", &guilt).is_ok());
        assert!(ensure_no_guilt_signal("{\"guiltySuspectId\":\"s2\"}", &guilt).is_err());
        assert!(ensure_no_guilt_signal("{\"crimestory\":\"...\"}", &guilt).is_err());
        assert!(
            ensure_no_guilt_signal("{\"story\":\"They moved the ledger at 02:14.\"}", &guilt)
                .is_err()
        );
    }
}
