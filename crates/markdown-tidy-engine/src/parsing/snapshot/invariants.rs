use xi_rope::Rope;

use crate::parsing::{blocks::BlockNode, inline::InlineNode};

/// Validates block scanner output.
///
/// Asserts that:
/// - Blocks tile the rope: the first starts at 0, each starts where the
///   previous ended, the last ends at the rope length
/// - Content spans are contained within their block spans
/// - Blank-line runs are maximal (never two in a row)
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let mut pos = 0;
    for b in blocks {
        assert_eq!(
            b.span.start, pos,
            "gap or overlap before block {:?} at {:?}",
            b.kind, b.span
        );
        assert!(
            b.span.start < b.span.end,
            "empty block span: {:?}",
            b.span
        );
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
        pos = b.span.end;
    }
    assert_eq!(pos, rope.len(), "blocks do not reach the end of the rope");

    for pair in blocks.windows(2) {
        assert!(
            !(pair[0].kind.is_blank() && pair[1].kind.is_blank()),
            "adjacent blank runs at {:?} and {:?}",
            pair[0].span,
            pair[1].span
        );
    }
}

/// Validates that inline nodes tile a block's content span in order.
pub fn check_inline(block: &BlockNode, nodes: &[InlineNode]) {
    let mut pos = block.content_span.start;
    for n in nodes {
        assert_eq!(n.span().start, pos, "inline gap or overlap at {:?}", n);
        pos = n.span().end;
    }
    assert_eq!(
        pos, block.content_span.end,
        "inline nodes do not cover {:?}",
        block.content_span
    );
}
