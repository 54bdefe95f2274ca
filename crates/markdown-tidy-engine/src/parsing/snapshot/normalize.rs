use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
    links::LinkTable,
    parse_inline_for_block,
    rope::slice::preview,
};

/// Readable summary of a scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Summary of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnap {
    /// Block kind as a string (e.g. "Heading(1)", "FencedCode(Backtick, 3, rust)").
    pub kind: String,
    pub span: (usize, usize),
    /// Preview of block text (truncated for readability).
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

/// Summary of one inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSnap {
    /// Node kind as a string (e.g. "Text", "Ref(Shortcut, foo, resolved)").
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
}

pub fn kind_label(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::Paragraph => "Paragraph".to_string(),
        BlockKind::FencedCode {
            fence,
            len,
            info,
            closed,
        } => {
            let mut s = format!("FencedCode({fence:?}, {len}");
            if let Some(info) = info {
                s.push_str(&format!(", {info}"));
            }
            if !closed {
                s.push_str(", unclosed");
            }
            s.push(')');
            s
        }
        BlockKind::IndentedCode => "IndentedCode".to_string(),
        BlockKind::LinkRefDef { label, .. } => format!("LinkRefDef({label})"),
        BlockKind::BlankLines { count } => format!("BlankLines({count})"),
    }
}

fn inline_label(node: &InlineNode) -> String {
    match node {
        InlineNode::Text(_) => "Text".to_string(),
        InlineNode::CodeSpan { ticks, .. } => format!("CodeSpan({ticks})"),
        InlineNode::EscapedChar { literal, .. } => format!("Escaped({literal})"),
        InlineNode::LinkReference {
            label,
            form,
            resolved,
            ..
        } => {
            let state = if *resolved { "resolved" } else { "unresolved" };
            format!("Ref({form:?}, {label}, {state})")
        }
    }
}

/// Converts scanned blocks and their inline nodes into a [`Snap`].
pub fn normalize(rope: &Rope, blocks: &[BlockNode], links: &LinkTable) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let inline = parse_inline_for_block(rope, b, links)
                .iter()
                .map(|n| InlineSnap {
                    kind: inline_label(n),
                    span: (n.span().start, n.span().end),
                    text: preview(rope, n.span(), 60),
                })
                .collect();

            BlockSnap {
                kind: kind_label(&b.kind),
                span: (b.span.start, b.span.end),
                text: preview(rope, b.span, 80),
                inline,
            }
        })
        .collect();

    Snap { blocks }
}

impl Snap {
    /// Just the block kinds, in order.
    pub fn kinds(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.kind.as_str()).collect()
    }
}
