use crate::parsing::rope::{is_blank, lines::LineRef, span::Span};

use super::{
    kinds::{
        AtxHeading, CodeFence, Container, ContainerPrefix, FenceSig, IndentedCode,
        LinkRefDefinition, LinkRefParts,
    },
    types::BlockKind,
};

/// Code behind block quote or list item markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedCode {
    pub containers: Vec<Container>,
    /// The fence signature for fenced code, `None` for indented code.
    pub fence: Option<FenceSig>,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block scanning: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, terminator included.
    pub line: Span,
    /// Byte span of the line without its terminator.
    pub body: Span,
    /// Text of `body`.
    pub text: String,
    /// Whether the line holds nothing but spaces, tabs and stray `\r`s.
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// Indented by four spaces or a tab (and not blank).
    pub is_indented: bool,
    /// `(level, marker_end)` when the line is an ATX heading.
    pub heading: Option<(u8, usize)>,
    /// Set when the whole line is a link reference definition.
    pub link_ref: Option<LinkRefParts>,
    /// Set when a fence or indented code follows container markers.
    pub nested_code: Option<NestedCode>,
}

/// Classifies individual lines for the block scanning phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.text.as_str();
        let is_blank = is_blank(text);

        LineClass {
            line: lr.span,
            body: lr.body,
            text: lr.text.clone(),
            is_blank,
            fence_sig: CodeFence::sig(text),
            is_indented: !is_blank && IndentedCode::is_indented(text),
            heading: AtxHeading::parse(text),
            link_ref: LinkRefDefinition::parse(text),
            nested_code: if is_blank { None } else { Self::nested_code(text) },
        }
    }

    fn nested_code(text: &str) -> Option<NestedCode> {
        let nested = ContainerPrefix::parse(text);
        if nested.containers.is_empty() {
            return None;
        }
        let rest = &text[nested.content_start..];
        if is_blank(rest) {
            return None;
        }
        let fence = CodeFence::sig(rest);
        (fence.is_some() || IndentedCode::is_indented(rest)).then(|| NestedCode {
            containers: nested.containers,
            fence,
        })
    }
}

/// Whether the formatter may touch a block's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// Copied byte for byte.
    Opaque,
    /// Eligible for whitespace and spacing normalization.
    Formattable,
}

impl BlockClass {
    pub fn of(kind: &BlockKind) -> Self {
        match kind {
            BlockKind::FencedCode { .. } | BlockKind::IndentedCode => BlockClass::Opaque,
            BlockKind::Heading { .. }
            | BlockKind::Paragraph
            | BlockKind::LinkRefDef { .. }
            | BlockKind::BlankLines { .. } => BlockClass::Formattable,
        }
    }

    pub fn is_opaque(self) -> bool {
        self == BlockClass::Opaque
    }
}
