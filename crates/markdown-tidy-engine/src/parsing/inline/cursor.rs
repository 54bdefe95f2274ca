/// Byte cursor over a block's inline content.
///
/// Indexes are local to `s`; `base` is where `s` starts in the rope, so
/// `pos()` yields absolute offsets for spans. Every delimiter the scanner
/// stops on is ASCII, which keeps stops on char boundaries.
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute offset of the current byte.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `n` places past the current one.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Length of the run of `b` starting here (0 past the end).
    pub fn run_len(&self, b: u8) -> usize {
        self.s
            .as_bytes()
            .get(self.i..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| c == b).count())
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
