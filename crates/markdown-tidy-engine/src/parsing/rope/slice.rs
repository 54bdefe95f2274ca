use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.range()).into_owned()
}

/// Appends the text for a span to `out` without an intermediate String.
pub fn push_slice(rope: &Rope, sp: Span, out: &mut String) {
    if !sp.is_empty() {
        out.push_str(&rope.slice_to_cow(sp.range()));
    }
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
