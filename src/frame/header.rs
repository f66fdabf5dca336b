//! The on-disk file stamp and its little-endian, packed byte layout.
//!
//! Translated from the `file_stamp` struct shared by all four `lzpgt*.c`
//! sources:
//!
//! ```c
//! typedef struct {
//!     char alg[8];
//!     int64_t ppp_nblocks;
//!     int ppp_lastblocksize;
//!     int ppp_WBITS;   // configurable variants only
//! } file_stamp;
//! ```
//!
//! The C source writes this via a raw `fwrite(&fstamp, sizeof(file_stamp), 1,
//! pOUT)`, so its on-disk shape depends on the host compiler's struct padding
//! and endianness. This implementation instead serializes each field
//! explicitly as little-endian (§9 "Endianness and struct padding"), which
//! makes the format portable across architectures at the cost of not
//! byte-matching any particular C build.

use std::io::{Read, Write};

use crate::error::{PppError, Result};

/// Size in bytes of the on-disk stamp (`8 + 8 + 4 + 4`).
pub const STAMP_SIZE: usize = 24;

/// The default `alg` tag written by this implementation. Decoders never
/// validate this field (§9 "Tag validation"), so files carrying any of the
/// source family's tags (`"LZPGT"`, `"LZPGT2"`, `"LZPGT6"`, `"LZPGT7"`) are
/// still accepted.
pub const ALG_TAG: &[u8; 8] = b"PPPRS\0\0\0";

/// The fixed-size file stamp: algorithm tag, full-block count, trailing
/// short-block size, and predictor table width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    /// Informational only; never validated on read (§9).
    pub alg: [u8; 8],
    /// Number of full blocks in the payload.
    pub nblocks: i64,
    /// Byte count of the trailing short block (0 if none).
    pub last_block_size: i32,
    /// Predictor table width in bits, `[15, 30]`.
    pub w_bits: i32,
}

impl FileStamp {
    /// A placeholder stamp written before encoding begins, with the real
    /// tag but zeroed counts — the back-patch target (§4.6).
    pub fn placeholder(w_bits: u32) -> Self {
        FileStamp {
            alg: *ALG_TAG,
            nblocks: 0,
            last_block_size: 0,
            w_bits: w_bits as i32,
        }
    }

    /// Serializes the stamp to its fixed 24-byte little-endian layout.
    pub fn to_bytes(self) -> [u8; STAMP_SIZE] {
        let mut out = [0u8; STAMP_SIZE];
        out[0..8].copy_from_slice(&self.alg);
        out[8..16].copy_from_slice(&self.nblocks.to_le_bytes());
        out[16..20].copy_from_slice(&self.last_block_size.to_le_bytes());
        out[20..24].copy_from_slice(&self.w_bits.to_le_bytes());
        out
    }

    /// Parses a stamp from its fixed 24-byte little-endian layout.
    pub fn from_bytes(buf: &[u8; STAMP_SIZE]) -> Self {
        let mut alg = [0u8; 8];
        alg.copy_from_slice(&buf[0..8]);
        FileStamp {
            alg,
            nblocks: i64::from_le_bytes(buf[8..16].try_into().unwrap()),
            last_block_size: i32::from_le_bytes(buf[16..20].try_into().unwrap()),
            w_bits: i32::from_le_bytes(buf[20..24].try_into().unwrap()),
        }
    }

    /// Writes the stamp to `sink`.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(&self.to_bytes()).map_err(PppError::SinkWrite)
    }

    /// Reads a stamp from `source`. A short read here is a truncation error,
    /// not a usage error: any file at least `STAMP_SIZE` bytes long is
    /// assumed to be a PPP stream.
    pub fn read_from<R: Read>(source: &mut R) -> Result<Self> {
        let mut buf = [0u8; STAMP_SIZE];
        source
            .read_exact(&mut buf)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::UnexpectedEof => PppError::Truncation {
                    expected: STAMP_SIZE,
                    got: 0,
                },
                _ => PppError::SourceRead(e),
            })?;
        Ok(Self::from_bytes(&buf))
    }
}
