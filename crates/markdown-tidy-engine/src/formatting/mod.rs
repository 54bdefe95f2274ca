//! # Formatting
//!
//! Turns a scanned document back into text.
//!
//! ## Pipeline
//!
//! 1. Blocks are scanned and the link table is built (`parsing`)
//! 2. Headings and paragraphs are scanned for inline nodes
//! 3. **`normalize`** plans the output as a list of `Piece`s: gap rules
//!    between blocks, trailing whitespace removal in prose
//! 4. **`emit`** writes the pieces; inserted line breaks copy the
//!    terminator of the line they follow, so mixed endings stay put
//!
//! Code blocks and link reference definitions only ever appear as
//! `Piece::Verbatim`, so their bytes cannot change.

pub mod emit;
pub mod normalize;
pub mod report;

use xi_rope::Rope;

use crate::{
    error::FormatError,
    options::FormatOptions,
    parsing::{links::LinkTable, parse_document, parse_inline_for_block, rope::detect_line_ending},
};

pub use normalize::Piece;
pub use report::LinkReport;

/// Result of one formatting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub output: String,
    /// Whether `output` differs from the input.
    pub changed: bool,
    pub report: LinkReport,
}

/// Formats raw bytes, failing only when they are not UTF-8.
pub fn format_bytes(input: &[u8], options: &FormatOptions) -> Result<Formatted, FormatError> {
    let text = std::str::from_utf8(input)?;
    Ok(format_str(text, options))
}

pub fn format_str(input: &str, options: &FormatOptions) -> Formatted {
    let rope = Rope::from(input);
    let blocks = parse_document(&rope).blocks;
    let links = LinkTable::build(&blocks);
    let inlines: Vec<_> = blocks
        .iter()
        .map(|b| parse_inline_for_block(&rope, b, &links))
        .collect();

    let pieces = normalize::normalize(&rope, &blocks, &inlines, options);
    let output = emit::emit(
        &rope,
        &pieces,
        detect_line_ending(&rope),
        options.blank_document,
    );
    let report = LinkReport::build(&links, inlines.iter().map(Vec::as_slice));
    let changed = output != input;

    log::debug!(
        "formatted {} bytes: {} blocks, {} link definitions, changed: {changed}",
        input.len(),
        blocks.len(),
        links.len()
    );

    Formatted {
        output,
        changed,
        report,
    }
}

/// Formats with default options.
pub fn format(input: &str) -> String {
    format_str(input, &FormatOptions::default()).output
}
