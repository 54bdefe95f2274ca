/// Reference-style links: `[text]`, `[text][]`, `[text][label]`.
pub struct LinkReference;

impl LinkReference {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// `[text](` starts an inline link, which is not a reference.
    pub const INLINE_DEST: u8 = b'(';
}
