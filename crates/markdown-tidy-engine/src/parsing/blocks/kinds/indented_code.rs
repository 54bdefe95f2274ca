/// Indented code block recognition.
pub struct IndentedCode;

impl IndentedCode {
    /// Spaces of indentation that turn a line into code.
    pub const INDENT: usize = 4;

    /// Returns true if a non-blank line body is indented enough to be code.
    pub fn is_indented(line: &str) -> bool {
        line.starts_with('\t') || line.bytes().take_while(|&c| c == b' ').count() >= Self::INDENT
    }
}
