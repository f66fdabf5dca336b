//! PPP (Predict-Predict-Predict) — a single-context, order-k hashed LZP
//! byte compressor, ported from the `lzpgt.c` / `lzpgt2.c` / `lzpgt6.c` /
//! `lzpgt7.c` source family by Gerald R. Tamayo.
//!
//! The codec emits one bit per input byte (hit/miss against a rolling-hash
//! prediction table) plus a literal byte for every miss. See
//! [`frame::compress`] and [`frame::decompress`] for the top-level entry
//! points.

pub mod bitio;
pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod predictor;
pub mod timefn;

pub use error::{PppError, Result};
pub use frame::{compress, decompress, DecodeStats};
pub use block::EncodeStats;
pub use predictor::PredictorTable;
