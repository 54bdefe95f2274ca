pub mod blocks;
pub mod inline;
pub mod links;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use links::LinkTable;
use rope::{lines_with_spans, slice::slice_to_string};

/// The scanned block sequence of one document.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline scan of a heading or paragraph; other blocks have no inline content.
pub fn parse_inline_for_block(
    rope: &Rope,
    b: &BlockNode,
    links: &LinkTable,
) -> Vec<inline::InlineNode> {
    if !b.kind.has_inline() {
        return vec![];
    }
    let s = slice_to_string(rope, b.content_span);
    let nodes = inline::parse_inline(b.content_span.start, &s, links);
    log::trace!(
        "{} inline nodes in {:?} at byte {}",
        nodes.len(),
        b.kind,
        b.span.start
    );
    nodes
}
