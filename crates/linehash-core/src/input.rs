//! # Input Text — The Only Path to Hashable Bytes
//!
//! `InputText` wraps one line of user text. Its inner `String` is private,
//! so the bytes handed to [`sha256_digest()`](crate::sha256_digest) are
//! always the UTF-8 encoding of valid text.
//!
//! ## Line Handling
//!
//! [`read_line()`] consumes bytes up to and including the first `\n`.
//! The terminator is stripped, together with a `\r` directly before it.
//! A final line with no terminator is taken as-is. A stream that is
//! already at EOF yields [`LinehashError::EndOfInput`]; an empty line
//! (just `\n`) is valid and yields empty text.

use std::io::BufRead;

use crate::error::LinehashError;

/// One line of user-provided text, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InputText(String);

impl InputText {
    /// Wrap text that is already free of a line terminator.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build text from a raw line as read from a stream.
    ///
    /// Strips one trailing `\n` (and a `\r` preceding it), then decodes
    /// the remaining bytes as UTF-8.
    pub fn from_line(mut line: Vec<u8>) -> Result<Self, LinehashError> {
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Self(String::from_utf8(line)?))
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 encoding of the text.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length of the UTF-8 encoding in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for InputText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for InputText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for InputText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read exactly one line of text from `reader`.
///
/// Only the first line is consumed; anything after it stays in the reader.
pub fn read_line<R: BufRead>(mut reader: R) -> Result<InputText, LinehashError> {
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        return Err(LinehashError::EndOfInput);
    }
    InputText::from_line(line)
}
