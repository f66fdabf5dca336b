//! Error types for the PPP codec.
//!
//! The source implementation treats every I/O failure as fatal: a failed
//! `fopen`, `fread` or `fwrite` aborts the whole program after printing a
//! diagnostic. [`PppError`] keeps that same all-errors-are-fatal shape but
//! gives each failure kind its own variant (§7 "Kinds") instead of a bare
//! process exit, so a caller embedding this crate as a library can match on
//! the failure instead of losing it to `exit()`.

use std::fmt;
use std::io;

/// Errors produced by compression, decompression, or CLI argument handling.
#[derive(Debug)]
pub enum PppError {
    /// Bad CLI arguments (mode letter, width, wrong argument count).
    Usage(String),
    /// The input file could not be opened for reading.
    SourceOpen(io::Error),
    /// The output file could not be opened for writing, or does not support
    /// the rewind-on-encode the format requires (§5).
    SinkOpen(io::Error),
    /// A read from the source failed after the stream was successfully opened.
    SourceRead(io::Error),
    /// A write to the sink failed.
    SinkWrite(io::Error),
    /// The requested predictor table width could not be allocated.
    AllocFailure {
        /// The table width, in bits, that was requested.
        w_bits: u32,
    },
    /// The source ended before the header's declared block counts were
    /// satisfied. Decoding a truncated stream is undefined behavior in the
    /// source; this crate detects it instead of producing garbage output.
    Truncation {
        /// Bytes the decoder still expected to read.
        expected: usize,
        /// Bytes actually available before the source was exhausted.
        got: usize,
    },
}

impl fmt::Display for PppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PppError::Usage(msg) => write!(f, "usage error: {msg}"),
            PppError::SourceOpen(e) => write!(f, "error opening input file: {e}"),
            PppError::SinkOpen(e) => write!(f, "error opening output file: {e}"),
            PppError::SourceRead(e) => write!(f, "error reading input: {e}"),
            PppError::SinkWrite(e) => write!(f, "error writing output: {e}"),
            PppError::AllocFailure { w_bits } => {
                write!(f, "error alloc: prediction table (2^{w_bits} bytes)")
            }
            PppError::Truncation { expected, got } => write!(
                f,
                "truncated input: expected {expected} more byte(s), found {got}"
            ),
        }
    }
}

impl std::error::Error for PppError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PppError>;
