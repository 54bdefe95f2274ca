//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other scanning
//! - **`Escape`**: `BACKSLASH` plus the set of escapable bytes
//! - **`LinkReference`**: `OPEN = b'['`, `CLOSE = b']'`, `INLINE_DEST = b'('`
//!
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod code_span;
pub mod escape;
pub mod link_reference;

pub use code_span::CodeSpan;
pub use escape::Escape;
pub use link_reference::LinkReference;
