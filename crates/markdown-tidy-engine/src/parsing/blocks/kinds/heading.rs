/// ATX heading recognition (`#` through `######`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;
    pub const MAX_INDENT: usize = 3;

    /// Returns `(level, marker_end)` for a heading line, where `marker_end`
    /// is the byte offset just past the `#` run.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        let b = line.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let level = b[indent..]
            .iter()
            .take_while(|&&c| c == Self::MARKER)
            .count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let marker_end = indent + level;
        match b.get(marker_end) {
            None | Some(b' ' | b'\t' | b'\r') => Some((level as u8, marker_end)),
            Some(_) => None,
        }
    }
}
