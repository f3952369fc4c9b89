//! Pipeline-fatal error taxonomy
//!
//! Parse-local, resolution-local, and composition-local failures are absorbed
//! inside their layers and never reach this type. Only serialization and the
//! store's save path can abort a request; a failed verification listing after
//! a successful save degrades to `verified: false` instead.

use docweave_compose::ComposeError;
use docweave_store::StoreError;

/// Errors that abort a whole assembly request
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// Document serialization failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] ComposeError),

    /// The artifact store rejected an operation
    #[error("artifact store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts() {
        let err: AssemblyError = StoreError::SaveFailed {
            key: "user:out.dwd".to_string(),
            reason: "quota".to_string(),
        }
        .into();
        assert!(err.to_string().contains("artifact store error"));
        assert!(err.to_string().contains("user:out.dwd"));
    }
}
