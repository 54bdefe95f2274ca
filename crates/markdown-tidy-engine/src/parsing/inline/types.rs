use crate::parsing::rope::span::Span;

/// How a reference link names its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceForm {
    /// `[text][label]`
    Full,
    /// `[text][]`
    Collapsed,
    /// `[text]`
    Shortcut,
}

/// A scanned inline node with byte spans into the rope.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
        /// Length of the delimiting backtick runs.
        ticks: usize,
    },
    /// A backslash followed by ASCII punctuation.
    EscapedChar { full: Span, literal: char },
    /// A reference link candidate; emitted exactly as written.
    LinkReference {
        /// Both bracket pairs, when present.
        full: Span,
        /// Normalized label used for lookup.
        label: String,
        form: ReferenceForm,
        /// Whether the label names a definition in the link table.
        resolved: bool,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::EscapedChar { full, .. }
            | InlineNode::LinkReference { full, .. } => *full,
        }
    }

    /// Only plain text may have whitespace trimmed.
    pub fn is_verbatim(&self) -> bool {
        !matches!(self, InlineNode::Text(_))
    }
}
