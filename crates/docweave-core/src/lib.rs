//! Docweave Core - Assembly Coordinator
//!
//! The top-level service that:
//! - Parses proposal text into blocks
//! - Resolves image artifacts from the shared store
//! - Composes one themed output document
//! - Persists it under a namespaced key and verifies the listing
//! - Produces a structured status record
//!
//! # Example
//!
//! ```rust
//! use docweave_core::{AssemblyService, MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let service = AssemblyService::new(Arc::new(MemoryStore::new()));
//! let record = service
//!     .assemble("# Proposal\n\nBody.", &[], "proposal.dwd")
//!     .await;
//! assert!(record.is_success());
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod service;
pub mod status;
pub mod telemetry;

// Re-exports for convenience
pub use error::AssemblyError;
pub use service::{AssemblyService, DOCUMENT_EXT, DOCUMENT_MIME};
pub use status::StatusRecord;

// Re-export the store surface callers need to construct a service
pub use docweave_store::{ArtifactStore, MemoryStore, StoreError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Docweave Core
    pub use crate::{ArtifactStore, AssemblyService, MemoryStore, StatusRecord};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
