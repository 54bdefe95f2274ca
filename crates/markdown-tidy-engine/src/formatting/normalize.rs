use xi_rope::Rope;

use crate::{
    options::FormatOptions,
    parsing::{
        blocks::{BlockClass, BlockKind, BlockNode},
        inline::InlineNode,
        rope::{line_ending_of, slice::push_slice, span::Span},
    },
};

/// One unit of output, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Source bytes copied unchanged.
    Verbatim(Span),
    /// A rewritten heading or paragraph, followed by its original line
    /// terminator (empty at the end of a document).
    Prose { text: String, terminator: Span },
    /// Blank lines, each ended with the terminator of the line before them.
    BlankLines { count: usize, newline: &'static str },
}

/// Plans the output of a document.
///
/// `inlines[i]` holds the inline nodes of `blocks[i]` (empty for blocks
/// without inline content). Blank runs at either edge produce nothing.
pub fn normalize(
    rope: &Rope,
    blocks: &[BlockNode],
    inlines: &[Vec<InlineNode>],
    options: &FormatOptions,
) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(blocks.len() * 2);
    let mut prev: Option<usize> = None;

    for (i, b) in blocks.iter().enumerate() {
        if b.kind.is_blank() {
            continue;
        }
        if let Some(p) = prev {
            // blank runs are maximal, so at most one block sits between
            let gap = (p + 1 < i).then(|| &blocks[p + 1]);
            if let Some(piece) = gap_piece(rope, &blocks[p], gap, b, options) {
                pieces.push(piece);
            }
        }
        pieces.push(block_piece(rope, b, inlines.get(i).map_or(&[][..], Vec::as_slice)));
        prev = Some(i);
    }
    pieces
}

fn gap_piece(
    rope: &Rope,
    prev: &BlockNode,
    gap: Option<&BlockNode>,
    next: &BlockNode,
    options: &FormatOptions,
) -> Option<Piece> {
    let opaque = BlockClass::of(&prev.kind).is_opaque() || BlockClass::of(&next.kind).is_opaque();
    let heading = prev.kind.is_heading() || next.kind.is_heading();

    let blank = |count| Piece::BlankLines {
        count,
        newline: line_ending_of(rope, prev.span),
    };

    match gap {
        Some(run) if opaque => Some(Piece::Verbatim(run.span)),
        _ if heading => {
            let n = options.blank_lines_around_headings;
            (n > 0).then(|| blank(n))
        }
        Some(_) => Some(blank(1)),
        None => None,
    }
}

fn block_piece(rope: &Rope, b: &BlockNode, nodes: &[InlineNode]) -> Piece {
    match b.kind {
        BlockKind::Heading { .. } | BlockKind::Paragraph => Piece::Prose {
            text: prose_text(rope, b, nodes),
            terminator: b.terminator_span(),
        },
        _ => Piece::Verbatim(b.span),
    }
}

/// Heading marker plus inline content with trailing whitespace removed
/// from every line. Only `Text` nodes are trimmed.
fn prose_text(rope: &Rope, b: &BlockNode, nodes: &[InlineNode]) -> String {
    let mut out = String::with_capacity(b.span.len());
    push_slice(rope, b.prefix_span(), &mut out);

    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate() {
        if node.is_verbatim() {
            push_slice(rope, node.span(), &mut out);
        } else {
            let text = rope.slice_to_cow(node.span().range());
            push_trimmed(&mut out, &text, i == last);
        }
    }
    out
}

/// Appends `text`, trimming whitespace before each line terminator it
/// contains, and after its final line when `at_end` is set.
///
/// A `\r` is only a terminator directly before `\n`; anywhere else at the
/// end of a line it is trimmed like a space.
fn push_trimmed(out: &mut String, text: &str, at_end: bool) {
    let mut rest = text;
    while let Some(nl) = rest.find('\n') {
        let line = &rest[..nl];
        let (line, cr) = match line.strip_suffix('\r') {
            Some(l) => (l, "\r"),
            None => (line, ""),
        };
        out.push_str(trim_trailing(line));
        out.push_str(cr);
        out.push('\n');
        rest = &rest[nl + 1..];
    }
    if at_end {
        out.push_str(trim_trailing(rest));
    } else {
        out.push_str(rest);
    }
}

fn trim_trailing(s: &str) -> &str {
    s.trim_end_matches([' ', '\t', '\r'])
}
