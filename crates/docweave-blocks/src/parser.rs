//! Streaming block parser
//!
//! Classifies proposal text line by line into [`Block`]s without a full
//! markdown grammar. The only parser state is whether a pipe-table run is
//! currently being accumulated.

use crate::block::{Block, HeadingLevel};
use crate::table::TableBuilder;
use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("ordered list marker pattern"));

/// Line-by-line parser producing an ordered block sequence
///
/// Never fails: malformed tables degrade to nothing (separator-only runs are
/// dropped by [`TableBuilder`]) and unclassifiable lines become paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockParser {
    tables: TableBuilder,
}

impl BlockParser {
    /// Create new block parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse text into an ordered block sequence
    ///
    /// Deterministic for a given input. A line containing `|` always belongs
    /// to a table run and is never examined for heading or list markers. The
    /// run is flushed the moment a non-delimiter line appears, before that
    /// line is classified; a blank line therefore ends a table run.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut table_run: Vec<String> = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();

            if line.contains('|') {
                table_run.push(line.to_string());
                continue;
            }

            if !table_run.is_empty() {
                self.flush_table(&mut table_run, &mut blocks);
            }

            if line.is_empty() {
                blocks.push(Block::Blank);
                continue;
            }

            blocks.push(classify(line));
        }

        if !table_run.is_empty() {
            self.flush_table(&mut table_run, &mut blocks);
        }

        blocks
    }

    fn flush_table(&self, run: &mut Vec<String>, blocks: &mut Vec<Block>) {
        if let Some(table) = self.tables.build(run) {
            blocks.push(table);
        }
        run.clear();
    }
}

/// Classify one non-blank, non-delimiter line
fn classify(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::heading(HeadingLevel::H1, rest.trim());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::heading(HeadingLevel::H2, rest.trim());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::heading(HeadingLevel::H3, rest.trim());
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Block::ListItem {
            text: rest.trim().to_string(),
            ordered: false,
        };
    }
    if let Some(m) = ORDERED_ITEM.find(line) {
        return Block::ListItem {
            text: line[m.end()..].trim().to_string(),
            ordered: true,
        };
    }
    Block::paragraph(line)
}
