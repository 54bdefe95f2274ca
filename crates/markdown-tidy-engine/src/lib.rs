pub mod error;
pub mod formatting;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use error::FormatError;
pub use formatting::{Formatted, LinkReport, format, format_bytes, format_str};
pub use options::{BlankDocument, FormatOptions};
