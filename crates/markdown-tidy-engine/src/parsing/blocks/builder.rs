use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, Container, ContainerPrefix, FenceSig},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        last_body_end: usize,
        last_line_end: usize,
    },
    Fence {
        sig: FenceSig,
        containers: Vec<Container>,
        start: usize,
        last_line_end: usize,
    },
    Indented {
        start: usize,
        last_line_end: usize,
    },
    Blank {
        start: usize,
        count: usize,
        last_line_end: usize,
    },
}

/// Turns classified lines into blocks that tile the document.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() && self.consume_fence_line(c) {
            return;
        }

        if c.is_blank {
            self.extend_blank(c.line);
            return;
        }

        match try_open_leaf(c) {
            Some(BlockOpen::FencedCode { sig, containers }) => {
                self.flush();
                self.leaf = LeafState::Fence {
                    sig,
                    containers,
                    start: c.line.start,
                    last_line_end: c.line.end,
                };
            }
            Some(BlockOpen::IndentedCode) => self.extend_indented(c.line),
            Some(BlockOpen::Heading { level, marker_end }) => {
                self.flush();
                self.out.push(BlockNode {
                    kind: BlockKind::Heading { level },
                    span: c.line,
                    content_span: Span::new(c.body.start + marker_end, c.body.end),
                });
            }
            Some(BlockOpen::LinkRefDef(parts)) => {
                self.flush();
                self.out.push(BlockNode {
                    kind: BlockKind::LinkRefDef {
                        label: parts.label,
                        destination: parts.destination,
                        title: parts.title,
                    },
                    span: c.line,
                    content_span: c.line,
                });
            }
            None => self.extend_paragraph(c),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    /// Adds a line to the open fence. Returns false, leaving the line for
    /// the caller, when it falls outside the containers the fence sits in.
    fn consume_fence_line(&mut self, c: &LineClass) -> bool {
        let LeafState::Fence {
            sig,
            containers,
            last_line_end,
            ..
        } = &mut self.leaf
        else {
            return false;
        };
        let Some(rest) = ContainerPrefix::continue_line(containers, &c.text) else {
            log::debug!("code fence ended with its container at byte {}", c.line.start);
            self.flush();
            return false;
        };
        *last_line_end = c.line.end;

        if CodeFence::closes(sig, CodeFence::sig(rest).as_ref())
            && let LeafState::Fence { sig, start, .. } =
                std::mem::replace(&mut self.leaf, LeafState::None)
        {
            let span = Span::new(start, c.line.end);
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode {
                    fence: sig.fence,
                    len: sig.len,
                    info: sig.info,
                    closed: true,
                },
                span,
                content_span: span,
            });
        }
        true
    }

    fn extend_blank(&mut self, line: Span) {
        if let LeafState::Blank {
            count,
            last_line_end,
            ..
        } = &mut self.leaf
        {
            *count += 1;
            *last_line_end = line.end;
            return;
        }
        self.flush();
        self.leaf = LeafState::Blank {
            start: line.start,
            count: 1,
            last_line_end: line.end,
        };
    }

    fn extend_indented(&mut self, line: Span) {
        if let LeafState::Indented { last_line_end, .. } = &mut self.leaf {
            *last_line_end = line.end;
            return;
        }
        self.flush();
        self.leaf = LeafState::Indented {
            start: line.start,
            last_line_end: line.end,
        };
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph {
            last_body_end,
            last_line_end,
            ..
        } = &mut self.leaf
        {
            *last_body_end = c.body.end;
            *last_line_end = c.line.end;
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph {
            start: c.line.start,
            last_body_end: c.body.end,
            last_line_end: c.line.end,
        };
    }

    /// Emits whatever leaf is open and resets to `LeafState::None`.
    fn flush(&mut self) {
        let node = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph {
                start,
                last_body_end,
                last_line_end,
            } => BlockNode {
                kind: BlockKind::Paragraph,
                span: Span::new(start, last_line_end),
                content_span: Span::new(start, last_body_end),
            },
            LeafState::Fence {
                sig,
                start,
                last_line_end,
                ..
            } => {
                log::debug!("code fence opened at byte {start} was never closed");
                let span = Span::new(start, last_line_end);
                BlockNode {
                    kind: BlockKind::FencedCode {
                        fence: sig.fence,
                        len: sig.len,
                        info: sig.info,
                        closed: false,
                    },
                    span,
                    content_span: span,
                }
            }
            LeafState::Indented {
                start,
                last_line_end,
            } => {
                let span = Span::new(start, last_line_end);
                BlockNode {
                    kind: BlockKind::IndentedCode,
                    span,
                    content_span: span,
                }
            }
            LeafState::Blank {
                start,
                count,
                last_line_end,
            } => {
                let span = Span::new(start, last_line_end);
                BlockNode {
                    kind: BlockKind::BlankLines { count },
                    span,
                    content_span: span,
                }
            }
        };
        self.out.push(node);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
