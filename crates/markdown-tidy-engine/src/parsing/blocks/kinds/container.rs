use crate::parsing::rope::is_blank;

use super::IndentedCode;

/// A container a line can sit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    BlockQuote,
    /// Continuation lines must be indented by `indent` columns.
    ListItem { indent: usize },
}

/// The container markers opening a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedLine {
    pub containers: Vec<Container>,
    /// Byte offset where the content after the last marker starts.
    pub content_start: usize,
}

/// Block quote (`>`) and list item (`-`, `*`, `+`, `1.`, `1)`) markers.
///
/// Only enough is understood to find code blocks nested inside containers;
/// container content is never rewritten on the strength of this.
pub struct ContainerPrefix;

impl ContainerPrefix {
    pub const QUOTE: u8 = b'>';
    pub const MAX_INDENT: usize = 3;
    /// Longest ordered list number.
    pub const MAX_DIGITS: usize = 9;
    pub const TAB_STOP: usize = 4;

    /// Reads every marker at the start of `line`, outermost first.
    pub fn parse(line: &str) -> NestedLine {
        let mut nested = NestedLine::default();
        loop {
            let rest = &line[nested.content_start..];
            if let Some(len) = Self::block_quote(rest) {
                nested.containers.push(Container::BlockQuote);
                nested.content_start += len;
            } else if let Some((item, len)) = Self::list_item(rest) {
                nested.containers.push(item);
                nested.content_start += len;
            } else {
                return nested;
            }
        }
    }

    /// Length of a `>` marker and the one space or tab after it.
    pub fn block_quote(s: &str) -> Option<usize> {
        let b = s.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ').count();
        if indent > Self::MAX_INDENT || b.get(indent) != Some(&Self::QUOTE) {
            return None;
        }
        let len = indent + 1;
        Some(match b.get(len) {
            Some(b' ' | b'\t') => len + 1,
            _ => len,
        })
    }

    /// A list item marker with the item's content indent and the bytes the
    /// marker takes up on this line.
    pub fn list_item(s: &str) -> Option<(Container, usize)> {
        let b = s.as_bytes();
        let lead = b.iter().take_while(|&&c| c == b' ').count();
        if lead > Self::MAX_INDENT {
            return None;
        }
        let marker = match *b.get(lead)? {
            b'-' | b'*' | b'+' => 1,
            c if c.is_ascii_digit() => {
                let digits = b[lead..].iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_DIGITS || !matches!(b.get(lead + digits), Some(b'.' | b')'))
                {
                    return None;
                }
                digits + 1
            }
            _ => return None,
        };

        let after = lead + marker;
        let gap = b[after..]
            .iter()
            .take_while(|&&c| c == b' ' || c == b'\t')
            .count();
        if after + gap == b.len() {
            return Some((Container::ListItem { indent: after + 1 }, b.len()));
        }
        if gap == 0 {
            return None;
        }

        // Too wide a gap leaves indented code behind a one-space item indent.
        let width = columns(&b[after..after + gap], after);
        if width > IndentedCode::INDENT {
            Some((Container::ListItem { indent: after + 1 }, after + 1))
        } else {
            Some((Container::ListItem { indent: after + width }, after + gap))
        }
    }

    /// Strips the continuation of `containers` from `line`, or `None` when
    /// the line falls outside them.
    ///
    /// A blank line keeps list items open but closes block quotes.
    pub fn continue_line<'a>(containers: &[Container], line: &'a str) -> Option<&'a str> {
        let mut rest = line;
        for (i, container) in containers.iter().enumerate() {
            match *container {
                Container::BlockQuote => rest = &rest[Self::block_quote(rest)?..],
                Container::ListItem { indent } => {
                    if is_blank(rest) {
                        return (!containers[i..].contains(&Container::BlockQuote)).then_some("");
                    }
                    rest = strip_columns(rest, indent)?;
                }
            }
        }
        Some(rest)
    }
}

fn columns(ws: &[u8], start_col: usize) -> usize {
    let end = ws.iter().fold(start_col, |col, &c| match c {
        b'\t' => col + ContainerPrefix::TAB_STOP - col % ContainerPrefix::TAB_STOP,
        _ => col + 1,
    });
    end - start_col
}

/// Drops `cols` columns of leading whitespace, or `None` if there are fewer.
fn strip_columns(s: &str, cols: usize) -> Option<&str> {
    let mut col = 0;
    for (i, c) in s.bytes().enumerate() {
        if col >= cols {
            return Some(&s[i..]);
        }
        match c {
            b' ' => col += 1,
            b'\t' => col += ContainerPrefix::TAB_STOP - col % ContainerPrefix::TAB_STOP,
            _ => return None,
        }
    }
    (col >= cols).then_some("")
}
