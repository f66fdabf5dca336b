//! The block codec: drives one fixed-size block of up to
//! [`BLOCK_SIZE`](crate::config::BLOCK_SIZE) input bytes through the
//! predictor, producing (or consuming) a bit vector plus a literal queue.
//!
//! Ported from `compress_LZP`/`decompress_LZP` in the `lzpgt*.c` family.

pub mod compress;
pub mod decompress;

pub use compress::{BlockEncoder, EncodeStats};
pub use decompress::BlockDecoder;
