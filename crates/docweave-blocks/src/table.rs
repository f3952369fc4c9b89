//! Pipe-table construction
//!
//! Converts a contiguous run of pipe-delimited lines into a [`Block::Table`].
//! Separator rows are dropped before the row count is computed; a run that is
//! all separators yields no table at all.

use crate::block::Block;

/// Builds structured tables from accumulated pipe-delimited lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TableBuilder;

impl TableBuilder {
    /// Create new table builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Convert a run of pipe lines into a table block
    ///
    /// Returns `None` when no rows remain after separator removal; the caller
    /// drops the run silently.
    #[must_use]
    pub fn build(&self, lines: &[String]) -> Option<Block> {
        let rows: Vec<Vec<String>> = lines
            .iter()
            .filter(|line| !is_separator_row(line))
            .map(|line| split_row(line))
            .collect();

        if rows.is_empty() {
            return None;
        }

        Some(Block::Table { rows })
    }
}

/// A markdown alignment row: only pipes, dashes, colons, and whitespace
fn is_separator_row(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Strip one leading and one trailing delimiter, split on `|`, trim cells
fn split_row(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}
