//! Assembly coordinator
//!
//! Drives the full pipeline for one request: parse blocks, resolve images,
//! compose, serialize, persist under a namespaced key, then re-list the store
//! to confirm the document is visible. "Saved" and "confirmed visible" are
//! two separate facts; the second never undoes the first.

use crate::error::AssemblyError;
use crate::status::StatusRecord;
use docweave_blocks::BlockParser;
use docweave_compose::{DocumentComposer, Theme};
use docweave_store::{ArtifactResolver, ArtifactStore, PERSISTENT_PREFIX};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use ulid::Ulid;

/// Mime type of the serialized document
pub const DOCUMENT_MIME: &str = "application/vnd.docweave+json";

/// Expected output filename suffix (convention, not enforced)
pub const DOCUMENT_EXT: &str = ".dwd";

/// Top-level coordinator for document assembly requests
///
/// Each request runs on a single logical thread of control; store calls are
/// the only suspension points and no state is shared between in-flight
/// requests beyond the store itself.
#[derive(Debug, Clone)]
pub struct AssemblyService {
    store: Arc<dyn ArtifactStore>,
    parser: BlockParser,
    resolver: ArtifactResolver,
    composer: DocumentComposer,
}

impl AssemblyService {
    /// Create service over a shared artifact store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self::with_theme(store, Theme::default())
    }

    /// Create service with a specific document theme
    #[must_use]
    pub fn with_theme(store: Arc<dyn ArtifactStore>, theme: Theme) -> Self {
        Self {
            resolver: ArtifactResolver::new(Arc::clone(&store)),
            store,
            parser: BlockParser::new(),
            composer: DocumentComposer::with_theme(theme),
        }
    }

    /// Assemble one document from proposal text and session artifacts
    ///
    /// `image_filenames` are the caller-declared expected images, used only
    /// for placeholders when nothing could be resolved from the store.
    ///
    /// Never returns an error: pipeline-fatal failures are converted into a
    /// `failed` status record carrying the error description.
    pub async fn assemble(
        &self,
        proposal_text: &str,
        image_filenames: &[String],
        output_filename: &str,
    ) -> StatusRecord {
        let request_id = Ulid::new();
        info!(%request_id, %output_filename, text_len = proposal_text.len(), "assembly started");

        match self
            .run(proposal_text, image_filenames, output_filename)
            .await
        {
            Ok(record) => {
                info!(%request_id, "assembly completed");
                record
            }
            Err(e) => {
                error!(%request_id, error = %e, "assembly failed");
                StatusRecord::Failed {
                    error: e.to_string(),
                    message: format!("Failed to create document: {e}"),
                }
            }
        }
    }

    async fn run(
        &self,
        proposal_text: &str,
        image_filenames: &[String],
        output_filename: &str,
    ) -> Result<StatusRecord, AssemblyError> {
        if !output_filename.ends_with(DOCUMENT_EXT) {
            warn!(%output_filename, expected = DOCUMENT_EXT, "output filename has unexpected suffix");
        }

        let blocks = self.parser.parse(proposal_text);
        debug!(block_count = blocks.len(), "parsed proposal text");

        let images = self.resolver.resolve(output_filename).await?;

        let composition = self.composer.compose(&blocks, &images, image_filenames);
        let bytes = composition.document.to_bytes()?;
        let digest = blake3::hash(&bytes);
        debug!(size = bytes.len(), hash = %digest.to_hex(), "document serialized");

        let key = format!("{PERSISTENT_PREFIX}{output_filename}");
        let size_bytes = bytes.len();
        self.store.save(&key, bytes, DOCUMENT_MIME).await?;
        info!(%key, size_bytes, "document persisted");

        // Verification is best effort: a listing failure here degrades the
        // record, it does not fail an already-saved document.
        let verified = match self.store.list().await {
            Ok(keys) => keys.iter().any(|k| k.contains(output_filename)),
            Err(e) => {
                warn!(error = %e, "post-save listing failed, reporting unverified");
                false
            }
        };
        if !verified {
            warn!(%output_filename, "saved document not visible in listing");
        }

        Ok(StatusRecord::Success {
            filename: output_filename.to_string(),
            size_bytes,
            sections: composition.section_count,
            images_inserted: composition.images_inserted,
            verified,
            detail: format!(
                "Proposal document created: {output_filename} (blake3 {})",
                digest.to_hex()
            ),
            message: format!(
                "Document saved as {output_filename} ({size_bytes} bytes), {}",
                if verified {
                    "verified in artifact storage"
                } else {
                    "not visible in artifact listing"
                }
            ),
        })
    }
}
