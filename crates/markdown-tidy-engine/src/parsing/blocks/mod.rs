//! # Block Scanning
//!
//! Two-phase block scanning over the lines of a document.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank, fence signature, indentation,
//!    heading marker, link reference definition).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    groups lines into `BlockNode`s as blocks open and close.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode` and `BlockKind`
//! - **`kinds`**: syntax knowledge per block type (CodeFence, IndentedCode,
//!   AtxHeading, LinkRefDefinition) plus the block quote and list item
//!   markers code can hide behind (ContainerPrefix)
//! - **`classify`**: `MarkdownLineClassifier` for lines and `BlockClass`
//!   (opaque or formattable) for blocks
//! - **`open`**: `try_open_leaf` dispatch with code-first precedence
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks tile the document: no gaps, no overlaps, source order
//! - Fenced and indented code are raw zones: nothing inside them is
//!   reinterpreted as prose
//! - An unclosed fence swallows the rest of the document, or the rest of
//!   the block quote or list item it was opened in

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{BlockClass, LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
