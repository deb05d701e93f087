//! # linehash CLI entry point
//!
//! Parses command-line arguments, initialises tracing on stderr, and runs
//! the digest pipeline against the process's stdin and stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linehash_cli::digest::{run_digest, DigestArgs};

/// Print the SHA-256 digest of one line of text.
///
/// Prompts for a line on standard input, then prints the lowercase hex
/// digest and its length (always 64).
#[derive(Parser, Debug)]
#[command(name = "linehash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    digest: DigestArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "linehash starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_digest(&cli.digest, stdin.lock(), stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
