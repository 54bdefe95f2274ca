use serde::{Deserialize, Serialize};

/// Output for a document that holds nothing but blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankDocument {
    /// A single line terminator.
    #[default]
    SingleNewline,
    /// No bytes at all.
    Empty,
}

/// Knobs the surrounding driver passes into a formatting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Blank lines placed before and after every heading (except at the
    /// document edges).
    pub blank_lines_around_headings: usize,
    pub blank_document: BlankDocument,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            blank_lines_around_headings: 1,
            blank_document: BlankDocument::default(),
        }
    }
}
