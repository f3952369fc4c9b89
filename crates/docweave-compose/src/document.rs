//! Rendered document model
//!
//! The composer produces an immutable node list in one pass; serialization is
//! a separate, final step. Field order in these structs fixes the byte layout
//! of the serialized document, so identical inputs yield identical bytes.
//! There are no timestamps or other ambient values anywhere in the model.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Serialization failures (pipeline-fatal)
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The document could not be serialized
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One rendered element of the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderedNode {
    /// Heading; `accent` is true only on levels 1-2
    Heading {
        level: u8,
        text: String,
        accent: bool,
    },
    /// Body paragraph
    Paragraph {
        text: String,
        italic: bool,
        centered: bool,
    },
    /// List entry with marker semantics preserved
    ListItem { text: String, ordered: bool },
    /// Table; rows are padded/truncated to the header width, header renders
    /// bold in the accent color
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        style: String,
    },
    /// Paragraph break
    Blank,
    /// Page break before the gallery section
    PageBreak,
    /// Embedded picture at a fixed display width
    Image {
        name: String,
        bytes: Vec<u8>,
        width_inches: u32,
    },
}

/// One assembled output document
///
/// Created fresh per assembly request, never shared across requests, and
/// dropped once serialized to bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedDocument {
    /// Styling applied to every node
    pub theme: Theme,
    /// Ordered rendered nodes
    pub nodes: Vec<RenderedNode>,
}

impl ComposedDocument {
    /// Create document from a finished node list
    #[inline]
    #[must_use]
    pub fn new(theme: Theme, nodes: Vec<RenderedNode>) -> Self {
        Self { theme, nodes }
    }

    /// Serialize to the document's binary form
    ///
    /// # Errors
    /// Returns [`ComposeError::Serialization`] when encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ComposeError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Number of genuinely embedded pictures
    #[inline]
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, RenderedNode::Image { .. }))
            .count()
    }
}
