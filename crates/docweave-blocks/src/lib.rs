//! Docweave Blocks
//!
//! Streaming conversion of semi-structured proposal text into typed blocks.
//!
//! # Core Concepts
//!
//! - [`Block`]: one structural unit (heading, paragraph, list item, table,
//!   blank separator)
//! - [`BlockParser`]: line-by-line classifier with a single table-run state
//! - [`TableBuilder`]: pipe-line run to structured rows conversion
//!
//! # Example
//!
//! ```rust
//! use docweave_blocks::{Block, BlockParser};
//!
//! let blocks = BlockParser::new().parse("# Title\n\nBody text.");
//! assert_eq!(blocks.len(), 3);
//! assert!(blocks[0].is_section_heading());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod block;
mod parser;
mod table;

pub use block::{Block, HeadingLevel};
pub use parser::BlockParser;
pub use table::TableBuilder;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn parser_and_builder_agree_on_tables() {
        let parsed = BlockParser::new().parse("| H |\n|---|\n| b |");
        let built = TableBuilder::new()
            .build(&["| H |".to_string(), "|---|".to_string(), "| b |".to_string()])
            .unwrap();
        assert_eq!(parsed, vec![built]);
    }

    #[test]
    fn section_headings_counted_over_full_document() {
        let blocks = BlockParser::new().parse("# A\n## B\n### C\n## D");
        let sections = blocks.iter().filter(|b| b.is_section_heading()).count();
        assert_eq!(sections, 3);
    }
}
