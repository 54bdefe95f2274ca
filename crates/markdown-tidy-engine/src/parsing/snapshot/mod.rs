//! # Snapshot Testing Support
//!
//! Utilities for testing the scanners via readable summaries and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts scanned structures to a stable `Snap` summary
//! - **`invariants`**: Runtime checks for scanner correctness (blocks tile the
//!   document, inline nodes tile their block content)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_inline};
pub use normalize::{BlockSnap, InlineSnap, Snap, normalize};
