//! Docweave Store
//!
//! Artifact store capability and image resolution.
//!
//! # Core Concepts
//!
//! - [`ArtifactStore`]: opaque key/value + listing service (async trait)
//! - [`MemoryStore`]: in-process implementation with deterministic listing
//! - [`StoredValue`] / [`ArtifactPayload`]: loosely-typed value shapes and
//!   the explicit decode union over them
//! - [`ArtifactResolver`]: image discovery with per-key failure isolation
//!
//! The store exclusively owns persisted bytes; resolution only ever takes a
//! transient copy for the duration of one composition.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod payload;
mod resolver;
mod store;

pub use payload::ArtifactPayload;
pub use resolver::{
    display_name, is_image_key, ArtifactResolver, ImageEntry, IMAGE_EXTENSIONS, PERSISTENT_PREFIX,
};
pub use store::{ArtifactStore, InlineData, MemoryStore, StoreError, StoredValue};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn saved_document_is_never_resolved_as_image() {
        let store = Arc::new(MemoryStore::new());
        store
            .save("user:report.dwd", vec![0; 16], "application/vnd.docweave+json")
            .await
            .unwrap();

        let resolver = ArtifactResolver::new(store);
        assert!(resolver.resolve("report.dwd").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn raw_value_shape_resolves() {
        let store = Arc::new(MemoryStore::new());
        store.insert_value("user:raw.png", StoredValue::Raw(vec![5, 5]));

        let resolver = ArtifactResolver::new(store);
        let images = resolver.resolve("out.dwd").await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].bytes, vec![5, 5]);
    }
}
