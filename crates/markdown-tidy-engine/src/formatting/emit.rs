use xi_rope::Rope;

use crate::{options::BlankDocument, parsing::rope::slice::push_slice};

use super::normalize::Piece;

/// Writes the planned pieces into a fresh buffer.
///
/// A missing final terminator repeats the last one already written, or
/// `newline` when nothing was. An empty plan means the document held only
/// blank lines, and gets `newline` or nothing depending on `blank_document`.
pub fn emit(rope: &Rope, pieces: &[Piece], newline: &str, blank_document: BlankDocument) -> String {
    if pieces.is_empty() {
        return match blank_document {
            BlankDocument::SingleNewline => newline.to_string(),
            BlankDocument::Empty => String::new(),
        };
    }

    let mut out = String::with_capacity(rope.len() + 2 * pieces.len());
    for piece in pieces {
        match piece {
            Piece::Verbatim(sp) => push_slice(rope, *sp, &mut out),
            Piece::Prose { text, terminator } => {
                out.push_str(text);
                if terminator.is_empty() {
                    out.push_str(last_line_ending(&out, newline));
                } else {
                    push_slice(rope, *terminator, &mut out);
                }
            }
            Piece::BlankLines { count, newline } => {
                for _ in 0..*count {
                    out.push_str(newline);
                }
            }
        }
    }

    if !out.ends_with('\n') {
        out.push_str(last_line_ending(&out, newline));
    }
    out
}

fn last_line_ending<'a>(out: &str, fallback: &'a str) -> &'a str {
    match out.rfind('\n') {
        Some(nl) if out[..nl].ends_with('\r') => "\r\n",
        Some(_) => "\n",
        None => fallback,
    }
}
