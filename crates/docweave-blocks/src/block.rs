//! Block data model
//!
//! A [`Block`] is one structural unit of the input text. The parser emits an
//! ordered block sequence; rendering happens elsewhere, so the sequence can be
//! snapshot-tested independently of any document format.

use serde::{Deserialize, Serialize};

/// Heading depth recognized by the parser
///
/// Only the first two levels carry the theme accent color downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `# ` heading
    H1,
    /// `## ` heading
    H2,
    /// `### ` heading
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1-3)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Whether this level contributes to the section count
    #[inline]
    #[must_use]
    pub fn counts_as_section(&self) -> bool {
        matches!(self, HeadingLevel::H1 | HeadingLevel::H2)
    }
}

/// One parsed structural unit of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// ATX-style heading
    Heading {
        /// Heading depth
        level: HeadingLevel,
        /// Text after the marker, trimmed
        text: String,
    },
    /// Plain text line
    Paragraph {
        /// Line content, trimmed
        text: String,
    },
    /// Bullet or numbered list entry
    ListItem {
        /// Item text with the marker stripped
        text: String,
        /// True for `N. ` items, false for `- `/`* ` items
        ordered: bool,
    },
    /// Pipe table with separator rows already removed
    ///
    /// Row 0 is the header row. Rows are not required to have equal column
    /// counts; the renderer pads or truncates to the header width.
    Table {
        /// Header row followed by body rows
        rows: Vec<Vec<String>>,
    },
    /// Paragraph break marker (suppressed inside a table run)
    Blank,
}

impl Block {
    /// Convenience constructor for headings
    #[inline]
    #[must_use]
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Convenience constructor for paragraphs
    #[inline]
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Whether this block is a heading that counts as a section
    #[inline]
    #[must_use]
    pub fn is_section_heading(&self) -> bool {
        matches!(self, Block::Heading { level, .. } if level.counts_as_section())
    }
}
