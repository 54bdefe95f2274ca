use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the terminator if present).
    pub span: Span,
    /// Byte span of the line without its `\n` or `\r\n` terminator.
    pub body: Span,
    /// The line text without its terminator.
    pub text: String,
}

impl LineRef {
    /// Span of the line terminator; empty for a final line without one.
    pub fn terminator(&self) -> Span {
        Span::new(self.body.end, self.span.end)
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to keep newline characters, so consecutive line spans
/// tile the whole rope with no gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text: &str = match line.strip_suffix('\n') {
            Some(t) => t.strip_suffix('\r').unwrap_or(t),
            None => &line,
        };
        LineRef {
            span: Span { start, end: offset },
            body: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    })
}

/// Detects the line ending used by the document from its first terminator.
///
/// Documents without any terminator fall back to `\n`.
pub fn detect_line_ending(rope: &Rope) -> &'static str {
    match lines_with_spans(rope).next() {
        Some(line) if line.terminator().len() == 2 => "\r\n",
        _ => "\n",
    }
}

/// Whether a line body holds nothing but spaces, tabs and stray `\r`s.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches([' ', '\t', '\r']).is_empty()
}

/// Line ending of the last line in `sp`, `\n` when that line has none.
///
/// Lines inserted after a block copy this, so a document with mixed endings
/// formats the same way on every pass.
pub fn line_ending_of(rope: &Rope, sp: Span) -> &'static str {
    if rope.slice_to_cow(sp.range()).ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
