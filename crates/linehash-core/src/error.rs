//! # Error Types
//!
//! Every failure in linehash is terminal: there is no retry and no partial
//! result. The variants exist so the caller can report *why* the run
//! stopped, not so it can recover.

use thiserror::Error;

/// Top-level error type for linehash.
#[derive(Error, Debug)]
pub enum LinehashError {
    /// The input stream ended before any text was read.
    #[error("end of input reached before a line of text was read")]
    EndOfInput,

    /// The line read from the input stream is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// Reading the input or writing the report failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering of the report failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LinehashError {
    /// Whether this error belongs to the input class: the stream ended,
    /// was unreadable, or carried bytes that are not text.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EndOfInput | Self::InvalidEncoding(_) | Self::Io(_)
        )
    }
}
