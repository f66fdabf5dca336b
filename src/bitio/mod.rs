//! Bit-level I/O, LSB-first within each byte.
//!
//! Ported from the bit accumulator/`p_cnt`/`g_cnt` machinery that the `gtbitio*.c`
//! headers provide to all four `lzpgt*.c` sources. Two independent streams are
//! modeled: [`BitOutStream`] for encoding, [`BitInStream`] for decoding.

mod bit_in;
mod bit_out;

pub use bit_in::BitInStream;
pub use bit_out::BitOutStream;
