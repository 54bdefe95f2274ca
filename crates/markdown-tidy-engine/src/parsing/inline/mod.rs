//! # Inline Scanning
//!
//! Inline scanning runs over the content span of headings and paragraphs
//! and classifies every byte into exactly one [`InlineNode`].
//!
//! ## Architecture
//!
//! A first pass locates raw zones (code spans, backslash escapes) and pairs
//! up brackets outside them. A cursor then walks the content:
//! - Code spans suppress all other inline scanning inside them
//! - Escaped punctuation is a node of its own and never opens a link
//! - Reference links are recognized outside raw zones and checked against
//!   the [`LinkTable`](crate::parsing::links::LinkTable)
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, EscapedChar, LinkReference)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, ReferenceForm};
