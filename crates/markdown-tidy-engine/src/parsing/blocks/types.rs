use crate::parsing::rope::span::Span;

use super::kinds::FenceChar;

/// The kind of a top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading, always exactly one line.
    Heading { level: u8 },
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        fence: FenceChar,
        /// Length of the opening delimiter run.
        len: usize,
        info: Option<String>,
        /// False when the document ended before a closing fence.
        closed: bool,
    },
    /// Consecutive lines indented by four spaces or a tab.
    IndentedCode,
    /// A single-line `[label]: destination "title"` definition.
    LinkRefDef {
        label: String,
        destination: String,
        title: Option<String>,
    },
    /// A maximal run of blank lines.
    BlankLines { count: usize },
}

impl BlockKind {
    pub fn is_blank(&self) -> bool {
        matches!(self, BlockKind::BlankLines { .. })
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    /// Headings and paragraphs carry inline content.
    pub fn has_inline(&self) -> bool {
        matches!(self, BlockKind::Heading { .. } | BlockKind::Paragraph)
    }
}

/// A scanned block with its kind and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block's lines, terminators included.
    pub span: Span,
    /// Inline content: heading text after the `#` run, or paragraph text
    /// without its final line terminator. Equals `span` for other kinds.
    pub content_span: Span,
}

impl BlockNode {
    /// Bytes between the block start and its content (a heading's `#` run).
    pub fn prefix_span(&self) -> Span {
        Span::new(self.span.start, self.content_span.start)
    }

    /// The final line terminator of an inline block, empty when the block
    /// ends the document without one.
    pub fn terminator_span(&self) -> Span {
        if self.kind.has_inline() {
            Span::new(self.content_span.end, self.span.end)
        } else {
            Span::new(self.span.end, self.span.end)
        }
    }
}
