//! Artifact store capability
//!
//! The store is an opaque, session-scoped key/value + listing service. It
//! exclusively owns persisted bytes; callers only ever hold transient copies.
//! Values come back in one of several loosely-typed shapes ([`StoredValue`]);
//! byte extraction lives in [`crate::payload`].

use async_trait::async_trait;
use dashmap::DashMap;

/// Errors surfaced by artifact store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Listing the key space failed
    #[error("listing failed: {0}")]
    ListFailed(String),

    /// Loading one key failed
    #[error("load failed for {key}: {reason}")]
    LoadFailed {
        /// Key that failed to load
        key: String,
        /// Underlying reason
        reason: String,
    },

    /// Saving one key failed
    #[error("save failed for {key}: {reason}")]
    SaveFailed {
        /// Key that failed to save
        key: String,
        /// Underlying reason
        reason: String,
    },
}

/// Inline data payload carried inside a stored part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    /// Raw bytes
    pub data: Vec<u8>,
    /// Mime type hint, when the store recorded one
    pub mime_type: Option<String>,
}

/// Shapes a stored value can take when loaded back
///
/// Stores in the wild return heterogeneous objects; these variants cover the
/// ones byte extraction knows how to probe, plus a catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// Structured part that may carry bytes inline or directly
    Part {
        /// Nested inline-data capability
        inline_data: Option<InlineData>,
        /// Direct byte payload field
        data: Option<Vec<u8>>,
    },
    /// The value itself is raw bytes
    Raw(Vec<u8>),
    /// Anything else the store handed back
    Opaque(serde_json::Value),
}

impl StoredValue {
    /// Build the part shape a `save` produces
    #[inline]
    #[must_use]
    pub fn inline(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self::Part {
            inline_data: Some(InlineData {
                data,
                mime_type: Some(mime_type.into()),
            }),
            data: None,
        }
    }
}

/// Key-addressed binary object store scoped to one session
///
/// All three operations are suspension points; implementations must be safe
/// to share across concurrent assembly requests.
#[async_trait]
pub trait ArtifactStore: Send + Sync + std::fmt::Debug {
    /// List every stored key; no ordering is guaranteed
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Load one key, `None` when absent
    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError>;

    /// Persist bytes under a key with a mime type hint
    async fn save(&self, key: &str, bytes: Vec<u8>, mime_type: &str) -> Result<(), StoreError>;
}

/// In-memory artifact store
///
/// Listing order is unspecified; consumers that need a stable order sort the
/// keys themselves, as the resolver does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredValue>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an arbitrary value shape (test seeding)
    #[inline]
    pub fn insert_value(&self, key: impl Into<String>, value: StoredValue) {
        self.entries.insert(key.into(), value);
    }

    /// Remove every key
    #[inline]
    pub fn reset(&self) {
        self.entries.clear();
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.iter().map(|e| e.key().clone()).collect())
    }

    async fn load(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self.entries.get(key).map(|e| e.value().clone()))
    }

    async fn save(&self, key: &str, bytes: Vec<u8>, mime_type: &str) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), StoredValue::inline(bytes, mime_type));
        Ok(())
    }
}
