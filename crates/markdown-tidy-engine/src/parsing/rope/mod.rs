pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, detect_line_ending, is_blank, line_ending_of, lines_with_spans};
pub use slice::{preview, push_slice, slice_to_string};
pub use span::Span;
