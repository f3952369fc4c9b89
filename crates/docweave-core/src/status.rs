//! Caller-visible status record
//!
//! One record per assembly call, immutable after construction, returned to
//! the caller and never persisted. The JSON shape distinguishes degraded
//! success (placeholders, `verified: false`) from hard failure, which carries
//! no size/section/image fields at all.

use serde::{Deserialize, Serialize};

/// Outcome of one assembly request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusRecord {
    /// Document produced, saved, and (best effort) verified
    Success {
        /// Output filename as given by the caller
        filename: String,
        /// Serialized document size
        size_bytes: usize,
        /// Level 1-2 headings rendered
        sections: usize,
        /// Genuinely embedded pictures (placeholders excluded)
        images_inserted: usize,
        /// Whether the post-save listing contained the output filename
        verified: bool,
        /// Machine-oriented detail (includes the document content hash)
        detail: String,
        /// Human-oriented confirmation
        message: String,
    },
    /// Request aborted by a pipeline-fatal error
    Failed {
        /// Error description
        error: String,
        /// Human-oriented explanation
        message: String,
    },
}

impl StatusRecord {
    /// Whether the assembly succeeded (possibly degraded)
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Verification flag; `false` for failures
    #[inline]
    #[must_use]
    pub fn verified(&self) -> bool {
        matches!(self, Self::Success { verified: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_json_shape() {
        let record = StatusRecord::Success {
            filename: "out.dwd".to_string(),
            size_bytes: 128,
            sections: 2,
            images_inserted: 1,
            verified: true,
            detail: "d".to_string(),
            message: "m".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["size_bytes"], 128);
        assert_eq!(json["sections"], 2);
        assert_eq!(json["images_inserted"], 1);
        assert_eq!(json["verified"], true);
    }

    #[test]
    fn failed_json_shape_has_no_counters() {
        let record = StatusRecord::Failed {
            error: "save failed".to_string(),
            message: "Failed to create document".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "save failed");
        assert!(json.get("size_bytes").is_none());
        assert!(json.get("sections").is_none());
        assert!(json.get("images_inserted").is_none());
    }

    #[test]
    fn accessors() {
        let failed = StatusRecord::Failed {
            error: "e".to_string(),
            message: "m".to_string(),
        };
        assert!(!failed.is_success());
        assert!(!failed.verified());
    }
}
