//! Decoder side of the block codec. Equivalent to `decompress_LZP` in the
//! `lzpgt*.c` source family.

use std::io::Write;

use crate::bitio::BitInStream;
use crate::error::{PppError, Result};
use crate::predictor::PredictorTable;
use std::io::Read;

/// Drives the predictor and bit stream to reproduce the original bytes from
/// `nblocks` full blocks plus an optional trailing short block.
pub struct BlockDecoder<'a> {
    table: &'a mut PredictorTable,
    h: u32,
}

impl<'a> BlockDecoder<'a> {
    /// Starts a fresh decode with context `h = 0`, matching the encoder's
    /// initial state.
    pub fn new(table: &'a mut PredictorTable) -> Self {
        BlockDecoder { table, h: 0 }
    }

    /// Decodes `nblocks` full blocks of `block_size` bytes each, followed by
    /// a trailing block of `last_block_size` bytes (0 if none), writing the
    /// reconstructed bytes to `sink` (§4.5).
    pub fn decode<R: Read, W: Write>(
        &mut self,
        source: &mut BitInStream<R>,
        sink: &mut W,
        nblocks: i64,
        block_size: usize,
        last_block_size: usize,
    ) -> Result<()> {
        for _ in 0..nblocks {
            self.decode_one_block(source, sink, block_size)?;
        }
        if last_block_size > 0 {
            self.decode_one_block(source, sink, last_block_size)?;
        }
        Ok(())
    }

    /// Decodes a single block of `n` bytes: `n` bits followed by the literal
    /// bytes for the misses. For a full block `n == block_size` and the
    /// byte boundary after the bits is automatic; for the trailing short
    /// block the caller passes `n < block_size` and an explicit `advance()`
    /// realigns the stream before literals (§4.5 steps 2-3).
    fn decode_one_block<R: Read, W: Write>(
        &mut self,
        source: &mut BitInStream<R>,
        sink: &mut W,
        n: usize,
    ) -> Result<()> {
        let mut bits = Vec::with_capacity(n);
        for _ in 0..n {
            bits.push(source.get_bit()?);
        }
        if n % 8 != 0 {
            source.advance();
        }

        let mut out = Vec::with_capacity(n);
        for hit in bits {
            let c = if hit {
                self.table.predict(self.h)
            } else {
                let c = source.get_byte()?;
                self.table.update(self.h, c);
                c
            };
            out.push(c);
            self.h = self.table.mix(self.h, c);
        }
        sink.write_all(&out).map_err(PppError::SinkWrite)?;
        Ok(())
    }
}
