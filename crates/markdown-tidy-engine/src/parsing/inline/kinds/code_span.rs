/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline scanning happens inside them
/// and normalization copies them byte for byte.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
