//! # Digest Report
//!
//! The user-facing result of one run: the hex digest and its character
//! count. Rendered either as two labelled text lines or as one JSON object.

use std::io::Write;

use serde::Serialize;

use crate::digest::ContentDigest;
use crate::error::LinehashError;

/// Label preceding the hex digest in text output.
pub const HASH_LABEL: &str = "SHA-256 Hash:";

/// Label preceding the hex length in text output.
pub const LENGTH_LABEL: &str = "Hash length:";

/// Digest plus the length of its hex rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestReport {
    digest: ContentDigest,
    length: usize,
}

impl DigestReport {
    /// Build a report for `digest`. The length is measured on the rendered
    /// hex, so it is always 64.
    pub fn new(digest: ContentDigest) -> Self {
        let length = digest.to_hex().len();
        Self { digest, length }
    }

    /// The reported digest.
    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }

    /// Character length of the hex digest.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Write the two text lines: the labelled digest, then the labelled length.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<(), LinehashError> {
        writeln!(out, "{HASH_LABEL} {}", self.digest)?;
        writeln!(out, "{LENGTH_LABEL} {}", self.length)?;
        Ok(())
    }

    /// Write the report as a single-line JSON object.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), LinehashError> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
