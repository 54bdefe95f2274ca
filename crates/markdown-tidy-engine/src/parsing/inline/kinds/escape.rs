/// Backslash escapes of ASCII punctuation (`\[`, `\*`, ...).
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Returns true if `next` can be escaped by a preceding backslash.
    pub fn escapes(next: Option<u8>) -> bool {
        next.is_some_and(|b| b.is_ascii_punctuation())
    }
}
