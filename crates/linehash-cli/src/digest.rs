//! # Digest Command
//!
//! The single-shot pipeline behind `linehash`: prompt, read one line,
//! hash, report. Streams are injected so the whole run can be exercised
//! without a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use linehash_core::{read_line, sha256_digest, DigestReport};

/// Prompt written before reading input.
pub const PROMPT: &str = "Enter text to hash: ";

/// Arguments controlling a digest run.
#[derive(Args, Debug, Clone, Default)]
pub struct DigestArgs {
    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the prompt before reading input.
    #[arg(long)]
    pub no_prompt: bool,
}

/// Output format for the digest report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two labelled lines: digest, then length.
    #[default]
    Text,
    /// One JSON object with `digest` and `length` fields.
    Json,
}

impl DigestArgs {
    fn shows_prompt(&self) -> bool {
        !self.no_prompt && self.format == OutputFormat::Text
    }
}

/// Execute one digest run against `input` and `out`.
///
/// Returns the process exit code on success. Any failure is returned as an
/// error, and no report line is written.
pub fn run_digest<R: BufRead, W: Write>(args: &DigestArgs, input: R, mut out: W) -> Result<u8> {
    if args.shows_prompt() {
        write!(out, "{PROMPT}").context("failed to write prompt")?;
        out.flush().context("failed to flush prompt")?;
    }

    let text = read_line(input).context("failed to read a line of text from standard input")?;
    tracing::debug!(bytes = text.len(), "read input line");

    let report = DigestReport::new(sha256_digest(&text));
    tracing::debug!(digest = %report.digest(), length = report.length(), "computed SHA-256 digest");

    match args.format {
        OutputFormat::Text => report.write_text(&mut out),
        OutputFormat::Json => report.write_json(&mut out),
    }
    .context("failed to write digest report")?;
    out.flush().context("failed to flush digest report")?;

    tracing::info!(format = ?args.format, "digest report written");
    Ok(0)
}
