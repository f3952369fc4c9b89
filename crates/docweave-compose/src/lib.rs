//! Docweave Compose
//!
//! Turns a parsed block sequence plus resolved images into one themed,
//! deterministic output document.
//!
//! # Core Concepts
//!
//! - [`DocumentComposer`]: single rendering pass, blocks first, gallery last
//! - [`ComposedDocument`] / [`RenderedNode`]: immutable rendered model with a
//!   byte-deterministic serialization
//! - [`Theme`]: accent color, fonts, image width, table style
//!
//! Composition never fails; only serialization can, and that error is
//! pipeline-fatal for the caller.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod composer;
mod document;
mod theme;

pub use composer::{Composition, DocumentComposer, GALLERY_TITLE};
pub use document::{ComposeError, ComposedDocument, RenderedNode};
pub use theme::{Rgb, Theme};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use docweave_blocks::BlockParser;

    #[test]
    fn identical_inputs_compose_to_identical_bytes() {
        let blocks = BlockParser::new().parse("# T\n\n| A | B |\n|---|---|\n| 1 | 2 |");
        let composer = DocumentComposer::new();

        let first = composer.compose(&blocks, &[], &[]).document.to_bytes().unwrap();
        let second = composer.compose(&blocks, &[], &[]).document.to_bytes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn composition_carries_theme() {
        let blocks = BlockParser::new().parse("# T");
        let composition = DocumentComposer::new().compose(&blocks, &[], &[]);
        assert_eq!(composition.document.theme, Theme::default());
    }
}
