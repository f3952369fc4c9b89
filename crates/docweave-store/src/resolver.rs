//! Image artifact resolution
//!
//! Walks the store's key space, filters to image-like keys that are not the
//! output document itself, and extracts bytes from each. Every per-key
//! failure is absorbed here; only a failed listing propagates.

use crate::payload::ArtifactPayload;
use crate::store::{ArtifactStore, StoreError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Extensions treated as image artifacts
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// Store key prefix marking user-visible, persistent artifacts
pub const PERSISTENT_PREFIX: &str = "user:";

/// One resolved image ready for embedding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Cosmetic name derived from the key, never used for lookup
    pub display_name: String,
    /// Resolver-owned copy of the stored bytes
    pub bytes: Vec<u8>,
    /// Key the bytes came from
    pub source_key: String,
}

/// Resolves image artifacts from a shared store
#[derive(Debug, Clone)]
pub struct ArtifactResolver {
    store: Arc<dyn ArtifactStore>,
}

impl ArtifactResolver {
    /// Create resolver over a store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    /// Resolve every embeddable image in the store
    ///
    /// Keys are processed in sorted order so the result is deterministic.
    /// Keys containing `output_filename` are skipped (never re-embed the
    /// document being produced), as are non-image keys. A key that fails to
    /// load or carries an unrecognized payload is skipped with a warning.
    ///
    /// # Errors
    /// Only a failed `list()` propagates; per-key failures never abort the
    /// remaining keys.
    pub async fn resolve(&self, output_filename: &str) -> Result<Vec<ImageEntry>, StoreError> {
        let mut keys = self.store.list().await?;
        keys.sort();
        info!(artifact_count = keys.len(), "scanning session artifacts");

        let mut images = Vec::new();
        for key in keys {
            if key.contains(output_filename) {
                debug!(%key, "skipping output file");
                continue;
            }
            if !is_image_key(&key) {
                debug!(%key, "skipping non-image artifact");
                continue;
            }

            let value = match self.store.load(&key).await {
                Ok(Some(value)) => value,
                Ok(None) => {
                    warn!(%key, "could not load artifact");
                    continue;
                }
                Err(e) => {
                    warn!(%key, error = %e, "error loading artifact");
                    continue;
                }
            };

            let Some(bytes) = ArtifactPayload::decode(&value).into_bytes() else {
                warn!(%key, "unrecognized artifact payload shape");
                continue;
            };

            let entry = ImageEntry {
                display_name: display_name(&key),
                bytes,
                source_key: key,
            };
            debug!(key = %entry.source_key, name = %entry.display_name, size = entry.bytes.len(), "queued image");
            images.push(entry);
        }

        info!(image_count = images.len(), "image resolution complete");
        Ok(images)
    }
}

/// Whether a key's lowercased form ends in a known image extension
#[must_use]
pub fn is_image_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derive a cosmetic display name from a store key
///
/// Strips the store-namespace prefixes and a `.png` suffix, replaces
/// underscores with spaces, and title-cases each word.
#[must_use]
pub fn display_name(key: &str) -> String {
    let name = key.strip_prefix(PERSISTENT_PREFIX).unwrap_or(key);
    let name = name.strip_prefix("user_").unwrap_or(name);
    let name = name.strip_suffix(".png").unwrap_or(name);
    let spaced = name.replace('_', " ");

    spaced
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
