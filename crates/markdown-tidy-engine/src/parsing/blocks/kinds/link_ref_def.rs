/// The pieces of a single-line link reference definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRefParts {
    /// Label as written between the brackets (not normalized).
    pub label: String,
    pub destination: String,
    pub title: Option<String>,
}

/// Link reference definition recognition: `[label]: destination "title"`.
pub struct LinkRefDefinition;

impl LinkRefDefinition {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const COLON: u8 = b':';
    pub const MAX_INDENT: usize = 3;

    /// Parses a whole line body as a definition, or returns `None`.
    pub fn parse(line: &str) -> Option<LinkRefParts> {
        let b = line.as_bytes();
        let mut i = b.iter().take_while(|&&c| c == b' ').count();
        if i > Self::MAX_INDENT || b.get(i) != Some(&Self::OPEN) {
            return None;
        }
        i += 1;

        let label_start = i;
        loop {
            match b.get(i)? {
                b'\\' if b.get(i + 1).is_some_and(u8::is_ascii_punctuation) => i += 2,
                &Self::OPEN => return None,
                &Self::CLOSE => break,
                _ => i += 1,
            }
        }
        let label = &line[label_start..i];
        if label.trim().is_empty() {
            return None;
        }
        i += 1;
        if b.get(i) != Some(&Self::COLON) {
            return None;
        }
        i += 1;
        i = skip_blank(b, i);

        let (destination, after_dest) = Self::destination(line, i)?;
        i = after_dest;

        let after_ws = skip_blank(b, i);
        if after_ws == b.len() {
            return Some(LinkRefParts {
                label: label.to_string(),
                destination,
                title: None,
            });
        }
        // A title must be separated from the destination.
        if after_ws == i {
            return None;
        }

        let (title, after_title) = Self::title(line, after_ws)?;
        if skip_blank(b, after_title) != b.len() {
            return None;
        }
        Some(LinkRefParts {
            label: label.to_string(),
            destination,
            title: Some(title),
        })
    }

    fn destination(line: &str, start: usize) -> Option<(String, usize)> {
        let b = line.as_bytes();
        if b.get(start) == Some(&b'<') {
            let mut i = start + 1;
            loop {
                match b.get(i)? {
                    b'\\' if b.get(i + 1).is_some_and(u8::is_ascii_punctuation) => i += 2,
                    b'<' => return None,
                    b'>' => return Some((line[start + 1..i].to_string(), i + 1)),
                    _ => i += 1,
                }
            }
        }

        let end = b[start..]
            .iter()
            .position(|c| matches!(c, b' ' | b'\t' | b'\r'))
            .map_or(b.len(), |p| start + p);
        (end > start).then(|| (line[start..end].to_string(), end))
    }

    fn title(line: &str, start: usize) -> Option<(String, usize)> {
        let b = line.as_bytes();
        let close = match b.get(start)? {
            b'"' => b'"',
            b'\'' => b'\'',
            b'(' => b')',
            _ => return None,
        };
        let mut i = start + 1;
        loop {
            match b.get(i)? {
                b'\\' if b.get(i + 1).is_some_and(u8::is_ascii_punctuation) => i += 2,
                &c if c == close => return Some((line[start + 1..i].to_string(), i + 1)),
                _ => i += 1,
            }
        }
    }
}

/// Skips spaces, tabs and stray `\r`s.
fn skip_blank(b: &[u8], mut i: usize) -> usize {
    while matches!(b.get(i), Some(b' ' | b'\t' | b'\r')) {
        i += 1;
    }
    i
}
