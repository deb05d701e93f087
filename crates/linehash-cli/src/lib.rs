//! # linehash-cli — Command-Line Interface for linehash
//!
//! Provides the `linehash` binary: prompt for one line of text, hash it
//! with SHA-256, and print the hex digest followed by its length.
//!
//! ```bash
//! $ linehash
//! Enter text to hash: abc
//! SHA-256 Hash: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
//! Hash length: 64
//!
//! $ printf 'abc\n' | linehash --format json
//! {"digest":"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad","length":64}
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; the pipeline lives in [`digest`]
//!   and takes its streams as parameters.
//! - Diagnostics go to stderr. Stdout carries only the prompt and report.

pub mod digest;
