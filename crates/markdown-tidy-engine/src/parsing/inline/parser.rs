use std::collections::HashMap;

use crate::parsing::{
    links::{LinkTable, normalize_label},
    rope::span::Span,
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Escape, LinkReference},
    types::{InlineNode, ReferenceForm},
};

/// Scans inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The block's inline content (heading text or paragraph lines)
/// - `links`: Definitions used to validate reference labels
///
/// # Raw Zone Precedence
/// Code spans and escapes are located first; brackets inside a code span or
/// escaped with a backslash never take part in link syntax.
///
/// # Returns
/// Nodes covering the entire input in order. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str, links: &LinkTable) -> Vec<InlineNode> {
    let zones = RawZones::scan(s);
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur, &zones)
            .or_else(|| try_parse_escape(&mut cur))
            .or_else(|| try_parse_link_reference(&mut cur, &zones, links));

        match node {
            Some(node) => {
                flush_text(&mut out, text_start, node.span().start);
                text_start = node.span().end;
                out.push(node);
            }
            // An unmatched backtick run is literal as a whole.
            None if cur.peek() == Some(CodeSpan::TICK) => cur.bump_n(cur.run_len(CodeSpan::TICK)),
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Code spans and matched bracket pairs, keyed by local start index.
#[derive(Debug, Default)]
struct RawZones {
    /// Opening tick index to `(closing tick index, tick count)`.
    code_spans: HashMap<usize, (usize, usize)>,
    /// `[` index to its matching `]` index, outside code spans and escapes.
    brackets: HashMap<usize, usize>,
}

impl RawZones {
    fn scan(s: &str) -> Self {
        let b = s.as_bytes();
        let ticks = TickRuns::index(b);
        let mut zones = Self::default();
        let mut open = vec![];
        let mut i = 0;

        while i < b.len() {
            match b[i] {
                Escape::BACKSLASH if Escape::escapes(b.get(i + 1).copied()) => i += 2,
                CodeSpan::TICK => {
                    let n = b[i..].iter().take_while(|&&c| c == CodeSpan::TICK).count();
                    match ticks.closer(i + n, n) {
                        Some(close) => {
                            zones.code_spans.insert(i, (close, n));
                            i = close + n;
                        }
                        None => i += n,
                    }
                }
                LinkReference::OPEN => {
                    open.push(i);
                    i += 1;
                }
                LinkReference::CLOSE => {
                    if let Some(o) = open.pop() {
                        zones.brackets.insert(o, i);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        zones
    }
}

/// Every maximal backtick run, grouped by length, for closer lookups that
/// stay linear even when many runs go unmatched.
struct TickRuns {
    by_len: HashMap<usize, Vec<usize>>,
}

impl TickRuns {
    fn index(b: &[u8]) -> Self {
        let mut by_len: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            if b[i] == CodeSpan::TICK {
                let n = b[i..].iter().take_while(|&&c| c == CodeSpan::TICK).count();
                by_len.entry(n).or_default().push(i);
                i += n;
            } else {
                i += 1;
            }
        }
        Self { by_len }
    }

    /// First run of exactly `n` ticks starting at or after `from`.
    fn closer(&self, from: usize, n: usize) -> Option<usize> {
        let runs = self.by_len.get(&n)?;
        runs.get(runs.partition_point(|&p| p < from)).copied()
    }
}

/// Attempts to take a code span located by [`RawZones::scan`].
fn try_parse_code_span(cur: &mut Cursor<'_>, zones: &RawZones) -> Option<InlineNode> {
    let &(close, ticks) = zones.code_spans.get(&cur.i)?;
    let start = cur.pos();
    let inner = Span {
        start: start + ticks,
        end: cur.base + close,
    };
    cur.bump_n(close + ticks - cur.i);

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner,
        ticks,
    })
}

/// Attempts to take a backslash escape of ASCII punctuation.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Escape::BACKSLASH) || !Escape::escapes(cur.peek_at(1)) {
        return None;
    }
    let start = cur.pos();
    let literal = char::from(cur.peek_at(1)?);
    cur.bump_n(2);
    Some(InlineNode::EscapedChar {
        full: Span {
            start,
            end: cur.pos(),
        },
        literal,
    })
}

/// Attempts to take a reference link candidate starting at `[`.
///
/// Handles `[text][label]`, `[text][]` and `[text]`. Returns `None` for an
/// unmatched bracket, an inline link `[text](...)`, or an empty label; the
/// caller then treats the `[` as text and keeps scanning inside it.
fn try_parse_link_reference(
    cur: &mut Cursor<'_>,
    zones: &RawZones,
    links: &LinkTable,
) -> Option<InlineNode> {
    if cur.peek() != Some(LinkReference::OPEN) {
        return None;
    }
    let open = cur.i;
    let close = *zones.brackets.get(&open)?;
    let after = close + 1;
    let bytes = cur.s.as_bytes();

    let (form, label_range, end) = match bytes.get(after) {
        Some(&LinkReference::INLINE_DEST) => return None,
        Some(&LinkReference::OPEN) => match zones.brackets.get(&after) {
            Some(&label_close) if !has_unescaped_open(&bytes[after + 1..label_close]) => {
                if label_close == after + 1 {
                    (ReferenceForm::Collapsed, (open + 1, close), label_close + 1)
                } else {
                    (ReferenceForm::Full, (after + 1, label_close), label_close + 1)
                }
            }
            _ => (ReferenceForm::Shortcut, (open + 1, close), after),
        },
        _ => (ReferenceForm::Shortcut, (open + 1, close), after),
    };

    let label = normalize_label(&cur.s[label_range.0..label_range.1]);
    if label.is_empty() {
        return None;
    }
    let resolved = links.get(&label).is_some();

    let start = cur.pos();
    cur.bump_n(end - open);
    Some(InlineNode::LinkReference {
        full: Span {
            start,
            end: cur.pos(),
        },
        label,
        form,
        resolved,
    })
}

fn has_unescaped_open(b: &[u8]) -> bool {
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            Escape::BACKSLASH if Escape::escapes(b.get(i + 1).copied()) => i += 2,
            LinkReference::OPEN => return true,
            _ => i += 1,
        }
    }
    false
}
