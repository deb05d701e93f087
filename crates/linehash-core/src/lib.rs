//! # linehash-core — Line Digest Primitives
//!
//! Domain types for turning one line of user text into a SHA-256 digest
//! report. The command-line crate owns I/O wiring; everything here is
//! either pure or generic over `BufRead`/`Write`.
//!
//! ## Key Design Principles
//!
//! 1. **`InputText` newtype.** All digest computation flows through
//!    `InputText`. `sha256_digest()` does not accept raw `&[u8]`, so every
//!    digest was computed over the UTF-8 encoding of a line that passed
//!    through [`read_line()`] or an explicit constructor.
//!
//! 2. **Fixed-width hex.** `ContentDigest` is always 32 bytes and always
//!    renders as exactly [`SHA256_HEX_LEN`] lowercase hex characters.
//!
//! 3. **SHA-256 is external.** Hashing delegates to the RustCrypto `sha2`
//!    crate. Nothing in this workspace implements the compression function.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod input;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use digest::{sha256_digest, sha256_hex, ContentDigest, SHA256_HEX_LEN, SHA256_LEN};
pub use error::LinehashError;
pub use input::{read_line, InputText};
pub use report::DigestReport;
