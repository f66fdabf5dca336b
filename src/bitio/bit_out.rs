//! `BitOutStream` — accumulates bits and interleaved whole bytes, LSB-first.

use std::io::{self, Write};

use crate::error::{PppError, Result};

/// Bit-packing writer. Bits are packed least-significant-bit first within
/// each accumulator byte, matching `put_ONE`/`put_ZERO` in the source's bit
/// I/O layer.
pub struct BitOutStream {
    buf: Vec<u8>,
    acc: u8,
    bit_count: u8,
    bytes_out: u64,
}

impl BitOutStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        BitOutStream {
            buf: Vec::new(),
            acc: 0,
            bit_count: 0,
            bytes_out: 0,
        }
    }

    /// Total bytes committed to the buffer so far (does not count a
    /// still-partial accumulator byte until it is flushed).
    pub fn bytes_out(&self) -> u64 {
        self.bytes_out
    }

    #[inline]
    fn commit_if_full(&mut self) {
        if self.bit_count == 8 {
            self.buf.push(self.acc);
            self.acc = 0;
            self.bit_count = 0;
            self.bytes_out += 1;
        }
    }

    /// Writes a set bit.
    #[inline]
    pub fn put_one(&mut self) {
        self.acc |= 1 << self.bit_count;
        self.bit_count += 1;
        self.commit_if_full();
    }

    /// Writes a clear bit.
    #[inline]
    pub fn put_zero(&mut self) {
        self.bit_count += 1;
        self.commit_if_full();
    }

    /// Writes a bit with the given truth value.
    #[inline]
    pub fn put_bit(&mut self, set: bool) {
        if set {
            self.put_one();
        } else {
            self.put_zero();
        }
    }

    /// Writes a whole byte directly into the buffer. Requires the stream to
    /// currently be on a byte boundary (`bit_count == 0`); full blocks always
    /// satisfy this because `BLOCK_SIZE % 8 == 0` (§4.4).
    #[inline]
    pub fn put_byte(&mut self, b: u8) {
        debug_assert_eq!(self.bit_count, 0, "put_byte called off a byte boundary");
        self.buf.push(b);
        self.bytes_out += 1;
    }

    /// Forces a partially filled accumulator into the buffer and resets the
    /// bit counter, padding the remaining high bits with zero. Used only at
    /// the last block's boundary (§4.5 "Boundary discipline"). A no-op if
    /// already on a byte boundary.
    pub fn advance(&mut self) {
        if self.bit_count > 0 {
            self.buf.push(self.acc);
            self.acc = 0;
            self.bit_count = 0;
            self.bytes_out += 1;
        }
    }

    /// Commits any partial accumulator and writes the whole buffer to `sink`
    /// in one call.
    pub fn flush<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        self.advance();
        sink.write_all(&self.buf)
            .map_err(map_write_err)?;
        Ok(())
    }
}

impl Default for BitOutStream {
    fn default() -> Self {
        Self::new()
    }
}

fn map_write_err(e: io::Error) -> PppError {
    PppError::SinkWrite(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_bits_lsb_first() {
        let mut s = BitOutStream::new();
        // 1 0 1 0 0 0 0 0  ->  0b0000_0101 = 0x05
        s.put_one();
        s.put_zero();
        s.put_one();
        for _ in 0..5 {
            s.put_zero();
        }
        let mut out = Vec::new();
        s.flush(&mut out).unwrap();
        assert_eq!(out, vec![0x05]);
    }

    #[test]
    fn put_byte_requires_byte_boundary() {
        let mut s = BitOutStream::new();
        s.put_byte(0xAB);
        s.put_byte(0xCD);
        let mut out = Vec::new();
        s.flush(&mut out).unwrap();
        assert_eq!(out, vec![0xAB, 0xCD]);
    }

    #[test]
    fn advance_pads_partial_byte_with_zero() {
        let mut s = BitOutStream::new();
        s.put_one();
        s.advance();
        let mut out = Vec::new();
        s.flush(&mut out).unwrap();
        assert_eq!(out, vec![0x01]);
    }

    #[test]
    fn advance_is_noop_on_boundary() {
        let mut s = BitOutStream::new();
        for _ in 0..8 {
            s.put_one();
        }
        s.advance();
        assert_eq!(s.bytes_out(), 1);
    }

    #[test]
    fn bytes_out_counts_committed_bytes() {
        let mut s = BitOutStream::new();
        for _ in 0..16 {
            s.put_zero();
        }
        assert_eq!(s.bytes_out(), 2);
    }
}
