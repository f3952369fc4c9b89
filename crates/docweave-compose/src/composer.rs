//! Document composition
//!
//! Single rendering pass over the parsed block sequence, followed by the
//! gallery section. Composition never fails: an image that cannot be embedded
//! becomes a placeholder paragraph and the pass continues.

use crate::document::{ComposedDocument, RenderedNode};
use crate::theme::Theme;
use docweave_blocks::Block;
use docweave_store::{display_name, ImageEntry};
use tracing::{info, warn};

/// Title of the trailing gallery section
pub const GALLERY_TITLE: &str = "Visual Analysis & Charts";

/// Result of one composition pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// The assembled document
    pub document: ComposedDocument,
    /// Count of level 1-2 headings in the block sequence
    pub section_count: usize,
    /// Count of genuinely embedded pictures (placeholders excluded)
    pub images_inserted: usize,
}

/// Assembles blocks and resolved images into one themed document
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    theme: Theme,
}

impl DocumentComposer {
    /// Create composer with the default theme
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create composer with a specific theme
    #[inline]
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Active theme
    #[inline]
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Compose blocks and images into one document
    ///
    /// `fallback_filenames` are the caller-declared expected images; they are
    /// rendered as placeholders when no image could be resolved at all.
    #[must_use]
    pub fn compose(
        &self,
        blocks: &[Block],
        images: &[ImageEntry],
        fallback_filenames: &[String],
    ) -> Composition {
        let mut nodes = Vec::new();
        let mut section_count = 0;

        for block in blocks {
            self.render_block(block, &mut nodes, &mut section_count);
        }
        info!(%section_count, "rendered block sequence");

        let images_inserted = if !images.is_empty() {
            self.render_gallery(images, &mut nodes)
        } else if !fallback_filenames.is_empty() {
            warn!(
                expected = fallback_filenames.len(),
                "no image artifacts resolved, rendering placeholders"
            );
            self.render_placeholders(fallback_filenames, &mut nodes);
            0
        } else {
            0
        };

        Composition {
            document: ComposedDocument::new(self.theme.clone(), nodes),
            section_count,
            images_inserted,
        }
    }

    fn render_block(&self, block: &Block, nodes: &mut Vec<RenderedNode>, sections: &mut usize) {
        match block {
            Block::Heading { level, text } => {
                let accent = level.counts_as_section();
                if accent {
                    *sections += 1;
                }
                nodes.push(RenderedNode::Heading {
                    level: level.depth(),
                    text: text.clone(),
                    accent,
                });
            }
            Block::Paragraph { text } => nodes.push(RenderedNode::Paragraph {
                text: text.clone(),
                italic: false,
                centered: false,
            }),
            Block::ListItem { text, ordered } => nodes.push(RenderedNode::ListItem {
                text: text.clone(),
                ordered: *ordered,
            }),
            Block::Table { rows } => {
                if let Some((header, body)) = rows.split_first() {
                    nodes.push(RenderedNode::Table {
                        header: header.clone(),
                        rows: body.iter().map(|row| fit_row(row, header.len())).collect(),
                        style: self.theme.table_style.clone(),
                    });
                }
            }
            Block::Blank => nodes.push(RenderedNode::Blank),
        }
    }

    /// Render the gallery of resolved images; returns the embed count
    fn render_gallery(&self, images: &[ImageEntry], nodes: &mut Vec<RenderedNode>) -> usize {
        nodes.push(RenderedNode::PageBreak);
        nodes.push(RenderedNode::Heading {
            level: 1,
            text: GALLERY_TITLE.to_string(),
            accent: true,
        });

        let mut inserted = 0;
        for image in images {
            nodes.push(RenderedNode::Heading {
                level: 2,
                text: image.display_name.clone(),
                accent: true,
            });

            // An empty payload cannot be embedded; degrade to a placeholder
            // and keep going with the remaining images.
            if image.bytes.is_empty() {
                warn!(key = %image.source_key, "failed to insert image");
                nodes.push(RenderedNode::Paragraph {
                    text: format!("[Error inserting chart: {}]", image.display_name),
                    italic: true,
                    centered: true,
                });
                continue;
            }

            nodes.push(RenderedNode::Image {
                name: image.display_name.clone(),
                bytes: image.bytes.clone(),
                width_inches: self.theme.image_width_inches,
            });
            nodes.push(RenderedNode::Blank);
            inserted += 1;
        }

        info!(inserted, total = images.len(), "gallery rendered");
        inserted
    }

    /// Render placeholders for images that never reached the store
    fn render_placeholders(&self, filenames: &[String], nodes: &mut Vec<RenderedNode>) {
        nodes.push(RenderedNode::PageBreak);
        nodes.push(RenderedNode::Heading {
            level: 1,
            text: GALLERY_TITLE.to_string(),
            accent: true,
        });

        for filename in filenames {
            nodes.push(RenderedNode::Heading {
                level: 2,
                text: display_name(filename),
                accent: true,
            });
            nodes.push(RenderedNode::Paragraph {
                text: format!("[Chart: {filename} - image not found in session artifacts]"),
                italic: true,
                centered: true,
            });
            nodes.push(RenderedNode::Blank);
        }
    }
}

/// Pad or truncate a body row to the header's column count
fn fit_row(row: &[String], width: usize) -> Vec<String> {
    let mut fitted: Vec<String> = row.iter().take(width).cloned().collect();
    fitted.resize(width, String::new());
    fitted
}
