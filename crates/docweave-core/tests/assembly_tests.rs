//! End-to-end assembly pipeline tests
//!
//! Exercise the full parse -> resolve -> compose -> persist -> verify flow
//! against the in-memory store and a few misbehaving store doubles.

use async_trait::async_trait;
use docweave_compose::{ComposedDocument, RenderedNode};
use docweave_core::{AssemblyService, StatusRecord, DOCUMENT_MIME};
use docweave_store::{
    ArtifactPayload, ArtifactStore, MemoryStore, StoreError, StoredValue,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn service_over(store: Arc<MemoryStore>) -> AssemblyService {
    AssemblyService::new(store)
}

async fn saved_document(store: &MemoryStore, key: &str) -> ComposedDocument {
    let value = store.load(key).await.unwrap().expect("document saved");
    let bytes = ArtifactPayload::decode(&value).into_bytes().expect("bytes");
    serde_json::from_slice(&bytes).expect("valid document encoding")
}

#[tokio::test]
async fn end_to_end_title_table_and_paragraph() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(Arc::clone(&store));

    let text = "# Title\n\n| Cost | Value |\n|---|---|\n| License | $10000 |\n\nSome text.";
    let record = service.assemble(text, &[], "proposal.dwd").await;

    let StatusRecord::Success {
        filename,
        size_bytes,
        sections,
        images_inserted,
        verified,
        ..
    } = &record
    else {
        panic!("expected success, got {record:?}");
    };
    assert_eq!(filename, "proposal.dwd");
    assert_eq!(*sections, 1);
    assert_eq!(*images_inserted, 0);
    assert!(*verified);
    assert!(*size_bytes > 0);

    let document = saved_document(&store, "user:proposal.dwd").await;
    let table = document
        .nodes
        .iter()
        .find_map(|n| match n {
            RenderedNode::Table { header, rows, .. } => Some((header.clone(), rows.clone())),
            _ => None,
        })
        .expect("one table rendered");
    assert_eq!(table.0, vec!["Cost".to_string(), "Value".to_string()]);
    assert_eq!(
        table.1,
        vec![vec!["License".to_string(), "$10000".to_string()]]
    );
    assert!(document.nodes.iter().any(|n| matches!(
        n,
        RenderedNode::Paragraph { text, .. } if text == "Some text."
    )));
}

#[tokio::test]
async fn stored_images_are_filtered_and_embedded() {
    let store = Arc::new(MemoryStore::new());
    store
        .save("user:roi_chart.png", vec![1, 2, 3], "image/png")
        .await
        .unwrap();
    store
        .save("meeting_notes.txt", vec![4], "text/plain")
        .await
        .unwrap();
    store
        .save("user:proposal.dwd", vec![5], DOCUMENT_MIME)
        .await
        .unwrap();

    let service = service_over(Arc::clone(&store));
    let record = service.assemble("# Summary", &[], "proposal.dwd").await;

    let StatusRecord::Success { images_inserted, .. } = &record else {
        panic!("expected success");
    };
    assert_eq!(*images_inserted, 1);

    let document = saved_document(&store, "user:proposal.dwd").await;
    assert_eq!(document.image_count(), 1);
    assert!(document.nodes.iter().any(|n| matches!(
        n,
        RenderedNode::Heading { level: 2, text, .. } if text == "Roi Chart"
    )));
}

#[tokio::test]
async fn unrecognized_payload_reduces_count_without_abort() {
    let store = Arc::new(MemoryStore::new());
    store
        .save("user:good.png", vec![9, 9], "image/png")
        .await
        .unwrap();
    store.insert_value(
        "user:weird.png",
        StoredValue::Opaque(serde_json::json!({"unexpected": true})),
    );

    let service = service_over(store);
    let record = service.assemble("body", &[], "out.dwd").await;

    let StatusRecord::Success { images_inserted, .. } = record else {
        panic!("expected success");
    };
    assert_eq!(images_inserted, 1);
}

#[tokio::test]
async fn declared_filenames_become_placeholders_when_store_is_empty() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(Arc::clone(&store));

    let expected = vec!["roi.png".to_string(), "costs.png".to_string()];
    let record = service.assemble("# T", &expected, "out.dwd").await;

    let StatusRecord::Success { images_inserted, .. } = &record else {
        panic!("expected success");
    };
    assert_eq!(*images_inserted, 0);

    let document = saved_document(&store, "user:out.dwd").await;
    assert_eq!(document.image_count(), 0);
    let placeholders = document
        .nodes
        .iter()
        .filter(|n| matches!(
            n,
            RenderedNode::Paragraph { text, italic: true, centered: true }
                if text.starts_with("[Chart: ")
        ))
        .count();
    assert_eq!(placeholders, 2);
}

#[tokio::test]
async fn idempotent_across_store_reset() {
    let store = Arc::new(MemoryStore::new());
    let service = service_over(Arc::clone(&store));
    let text = "# A\n## B\n\n| X |\n|---|\n| 1 |";

    let first = service.assemble(text, &[], "out.dwd").await;
    let first_value = store.load("user:out.dwd").await.unwrap().unwrap();
    let first_bytes = ArtifactPayload::decode(&first_value).into_bytes().unwrap();

    store.reset();

    let second = service.assemble(text, &[], "out.dwd").await;
    let second_value = store.load("user:out.dwd").await.unwrap().unwrap();
    let second_bytes = ArtifactPayload::decode(&second_value).into_bytes().unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

/// Store whose save always fails
#[derive(Debug, Default)]
struct RejectingStore {
    inner: MemoryStore,
}

#[async_trait]
impl ArtifactStore for RejectingStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.inner.list().await
    }

    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, _bytes: Vec<u8>, _mime_type: &str) -> Result<(), StoreError> {
        Err(StoreError::SaveFailed {
            key: key.to_string(),
            reason: "storage quota exceeded".to_string(),
        })
    }
}

#[tokio::test]
async fn save_failure_yields_failed_record_without_counters() {
    let service = AssemblyService::new(Arc::new(RejectingStore::default()));
    let record = service.assemble("# T", &[], "out.dwd").await;

    let StatusRecord::Failed { error, message } = &record else {
        panic!("expected failure, got {record:?}");
    };
    assert!(error.contains("storage quota exceeded"));
    assert!(message.starts_with("Failed to create document"));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["status"], "failed");
    assert!(json.get("sections").is_none());
    assert!(json.get("images_inserted").is_none());
}

/// Store that accepts saves but never lists them back
#[derive(Debug, Default)]
struct ForgetfulStore {
    inner: MemoryStore,
}

#[async_trait]
impl ArtifactStore for ForgetfulStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, bytes: Vec<u8>, mime_type: &str) -> Result<(), StoreError> {
        self.inner.save(key, bytes, mime_type).await
    }
}

#[tokio::test]
async fn missing_listing_entry_degrades_to_unverified_success() {
    let service = AssemblyService::new(Arc::new(ForgetfulStore::default()));
    let record = service.assemble("# T", &[], "out.dwd").await;

    let StatusRecord::Success { verified, .. } = &record else {
        panic!("expected degraded success, got {record:?}");
    };
    assert!(!verified);
    assert!(record.is_success());
}

/// Store whose listing is unavailable outright
#[derive(Debug, Default)]
struct UnlistableStore {
    inner: MemoryStore,
}

#[async_trait]
impl ArtifactStore for UnlistableStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::ListFailed("backend unreachable".to_string()))
    }

    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, bytes: Vec<u8>, mime_type: &str) -> Result<(), StoreError> {
        self.inner.save(key, bytes, mime_type).await
    }
}

#[tokio::test]
async fn list_failure_during_resolution_yields_failed_record() {
    let service = AssemblyService::new(Arc::new(UnlistableStore::default()));
    let record = service.assemble("# T", &[], "out.dwd").await;

    let StatusRecord::Failed { error, message } = &record else {
        panic!("expected failure, got {record:?}");
    };
    assert!(error.contains("listing failed"));
    assert!(error.contains("backend unreachable"));
    assert!(message.starts_with("Failed to create document"));
}

/// Store whose listing breaks only once a save has gone through
#[derive(Debug, Default)]
struct SaveThenUnlistableStore {
    inner: MemoryStore,
    saved: AtomicBool,
}

#[async_trait]
impl ArtifactStore for SaveThenUnlistableStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        if self.saved.load(Ordering::SeqCst) {
            return Err(StoreError::ListFailed("listing timed out".to_string()));
        }
        self.inner.list().await
    }

    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, bytes: Vec<u8>, mime_type: &str) -> Result<(), StoreError> {
        self.inner.save(key, bytes, mime_type).await?;
        self.saved.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn list_failure_during_verification_degrades_to_unverified_success() {
    let store = Arc::new(SaveThenUnlistableStore::default());
    let service = AssemblyService::new(Arc::clone(&store) as Arc<dyn ArtifactStore>);
    let record = service.assemble("# T", &[], "out.dwd").await;

    let StatusRecord::Success { verified, filename, .. } = &record else {
        panic!("expected degraded success, got {record:?}");
    };
    assert!(!verified);
    assert_eq!(filename, "out.dwd");

    // the save itself went through; only verification was lost
    assert!(store.inner.load("user:out.dwd").await.unwrap().is_some());
}
