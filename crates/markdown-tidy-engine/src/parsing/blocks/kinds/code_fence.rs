/// The character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    pub fn byte(self) -> u8 {
        match self {
            FenceChar::Backtick => CodeFence::BACKTICK,
            FenceChar::Tilde => CodeFence::TILDE,
        }
    }
}

/// What a line looks like when it could open or close a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub fence: FenceChar,
    /// Length of the delimiter run (always >= `CodeFence::MIN_LEN`).
    pub len: usize,
    /// Trimmed info string after the run, `None` when empty.
    pub info: Option<String>,
}

impl FenceSig {
    /// A closing line carries nothing but the delimiter run.
    pub fn is_bare(&self) -> bool {
        self.info.is_none()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;
    /// Fences may be indented by at most this many spaces.
    pub const MAX_INDENT: usize = 3;

    /// Recognizes a fence line (opener or closer) from a line body.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let b = line.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }

        let fence = match b.get(indent) {
            Some(&Self::BACKTICK) => FenceChar::Backtick,
            Some(&Self::TILDE) => FenceChar::Tilde,
            _ => return None,
        };
        let len = b[indent..]
            .iter()
            .take_while(|&&c| c == fence.byte())
            .count();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = line[indent + len..].trim_matches([' ', '\t']);
        // A backtick in the info string would make this an inline code span.
        if fence == FenceChar::Backtick && info.contains('`') {
            return None;
        }

        Some(FenceSig {
            fence,
            len,
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    /// Returns true if `line` closes a fence opened by `open`.
    pub fn closes(open: &FenceSig, line: Option<&FenceSig>) -> bool {
        matches!(line, Some(l) if l.fence == open.fence && l.len >= open.len && l.is_bare())
    }
}
