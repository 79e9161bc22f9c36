//! Redaction and publication guarantees.
//!
//! The serialized public artifact must be byte-for-byte free of guilt
//! signal, publication must write at most once, and every failure path must
//! fail closed: no identifier fabricated, no guilt record returned.

use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;

use casefile_common::CaseFileError;
use casefile_engine::testing::{sample_narrative, MemoryStore};
use casefile_engine::traits::ContentStore;
use casefile_engine::{redact, Publisher};
use lighthouse_client::LighthouseClient;

// =========================================================================
// Redaction
// =========================================================================

#[test]
fn serialized_public_case_carries_no_guilt_signal() {
    let narrative = sample_narrative();
    let crimestory = narrative.crimestory.clone();
    let (public_case, _guilt) = redact(narrative);

    let serialized = serde_json::to_string(&public_case).unwrap();
    assert!(!serialized.contains("guiltySuspectId"));
    assert!(!serialized.contains("crimestory"));
    assert!(!serialized.contains(&crimestory));
}

#[test]
fn guilt_record_references_exactly_one_public_suspect() {
    let (public_case, guilt) = redact(sample_narrative());
    let matches = public_case
        .suspects
        .iter()
        .filter(|s| s.id == guilt.guilty_suspect_id)
        .count();
    assert_eq!(matches, 1);
}

// =========================================================================
// Publication
// =========================================================================

#[tokio::test]
async fn successful_publication_writes_once_and_assigns_the_cid() {
    let store = Arc::new(MemoryStore::new());
    let publisher = Publisher::new(store.clone());

    let (public_case, guilt) = publisher.publish(sample_narrative()).await.unwrap();

    assert_eq!(store.write_count(), 1);
    assert_eq!(public_case.id, "QmTestCid0001");
    assert_eq!(guilt.guilty_suspect_id, "s2");

    let payload = store.last_payload().unwrap();
    assert!(!payload.contains("guiltySuspectId"));
    assert!(!payload.contains("crimestory"));
}

#[tokio::test]
async fn unreachable_store_fails_with_publication_failed() {
    let store = Arc::new(MemoryStore::failing());
    let publisher = Publisher::new(store.clone());

    let err = publisher.publish(sample_narrative()).await.unwrap_err();
    assert!(matches!(err, CaseFileError::PublicationFailed(_)));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn missing_store_credential_fails_closed() {
    // The real client with no credential: publication fails before any
    // request leaves the process, and no guilt fields come back.
    let store = Arc::new(LighthouseClient::new(None));
    let publisher = Publisher::new(store);

    let err = publisher.publish(sample_narrative()).await.unwrap_err();
    match err {
        CaseFileError::PublicationFailed(message) => {
            assert!(!message.contains("s2"));
        }
        other => panic!("expected PublicationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_narrative_is_rejected_before_any_write() {
    let store = Arc::new(MemoryStore::new());
    let publisher = Publisher::new(store.clone());

    let mut narrative = sample_narrative();
    narrative.guilty_suspect_id = "s9".to_string();

    let err = publisher.publish(narrative).await.unwrap_err();
    assert!(matches!(err, CaseFileError::MalformedNarrative(_)));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn empty_cid_from_the_store_is_an_error() {
    struct EmptyCidStore;

    #[async_trait]
    impl ContentStore for EmptyCidStore {
        async fn put_text(&self, _payload: &str, _name: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    let publisher = Publisher::new(Arc::new(EmptyCidStore));
    let err = publisher.publish(sample_narrative()).await.unwrap_err();
    assert!(matches!(err, CaseFileError::PublicationFailed(_)));
}

#[tokio::test]
async fn publication_is_not_retried_on_failure() {
    struct CountingStore {
        calls: std::sync::Mutex<usize>,
    }

    #[async_trait]
    impl ContentStore for CountingStore {
        async fn put_text(&self, _payload: &str, _name: &str) -> Result<String> {
            *self.calls.lock().unwrap() += 1;
            bail!("ambiguous failure")
        }
    }

    let store = Arc::new(CountingStore {
        calls: std::sync::Mutex::new(0),
    });
    let publisher = Publisher::new(store.clone());

    let _ = publisher.publish(sample_narrative()).await;
    assert_eq!(*store.calls.lock().unwrap(), 1);
}
