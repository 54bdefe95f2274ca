use std::str::Utf8Error;

/// Why a document could not be formatted.
///
/// Only encoding problems are errors; every other oddity in the input is
/// formatted as prose or left alone.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Encoding {
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },
}

impl From<Utf8Error> for FormatError {
    fn from(source: Utf8Error) -> Self {
        FormatError::Encoding {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}
