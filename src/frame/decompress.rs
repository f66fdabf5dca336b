//! Top-level stream decoder: reads the stamp once, then drives the block
//! decoder across `ppp_nblocks` full blocks plus an optional trailing short
//! block. Equivalent to the decompress branch of `main()` across the
//! `lzpgt*.c` family.

use std::io::{Read, Write};

use crate::bitio::BitInStream;
use crate::block::BlockDecoder;
use crate::config::{clamp_wbits, BLOCK_SIZE};
use crate::error::{PppError, Result};
use crate::frame::header::FileStamp;
use crate::predictor::PredictorTable;

/// Totals recorded by a decode run, mirroring [`EncodeStats`](crate::block::EncodeStats).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeStats {
    /// Full blocks decoded, taken from the header.
    pub nblocks: i64,
    /// Trailing short-block size, taken from the header.
    pub last_block_size: i32,
    /// Total output bytes written.
    pub bytes_out: u64,
}

/// Decompresses a PPP stream from `source`, writing the reconstructed bytes
/// to `sink`.
pub fn decompress<R: Read, W: Write>(source: &mut R, sink: &mut W) -> Result<DecodeStats> {
    let stamp = FileStamp::read_from(source)?;
    validate_stamp(&stamp)?;

    let w_bits = clamp_wbits(stamp.w_bits as u32);
    let mut table = PredictorTable::new(w_bits)?;
    let mut decoder = BlockDecoder::new(&mut table);
    let mut bits = BitInStream::new(source);

    decoder.decode(
        &mut bits,
        sink,
        stamp.nblocks,
        BLOCK_SIZE,
        stamp.last_block_size as usize,
    )?;

    Ok(DecodeStats {
        nblocks: stamp.nblocks,
        last_block_size: stamp.last_block_size,
        bytes_out: stamp.nblocks as u64 * BLOCK_SIZE as u64 + stamp.last_block_size as u64,
    })
}

/// Checks the header invariants from §3: `nblocks >= 0` and
/// `0 <= last_block_size < BLOCK_SIZE`. A file violating these was never
/// produced by this encoder.
fn validate_stamp(stamp: &FileStamp) -> Result<()> {
    if stamp.nblocks < 0 {
        return Err(PppError::Usage(format!(
            "corrupt header: negative block count {}",
            stamp.nblocks
        )));
    }
    if stamp.last_block_size < 0 || stamp.last_block_size as usize >= BLOCK_SIZE {
        return Err(PppError::Usage(format!(
            "corrupt header: last block size {} out of range",
            stamp.last_block_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::compress::compress;
    use std::io::Cursor;

    fn round_trip(data: &[u8], w_bits: u32) {
        let mut sink = Cursor::new(Vec::new());
        let mut src = data;
        compress(&mut src, &mut sink, w_bits).unwrap();
        let encoded = sink.into_inner();

        let mut cursor = &encoded[..];
        let mut out = Vec::new();
        let stats = decompress(&mut cursor, &mut out).unwrap();

        assert_eq!(out, data);
        assert_eq!(stats.bytes_out, data.len() as u64);
    }

    #[test]
    fn round_trip_empty() {
        round_trip(b"", 15);
    }

    #[test]
    fn round_trip_various_sizes() {
        for &n in &[1usize, 7, 8, 9, BLOCK_SIZE - 1, BLOCK_SIZE, BLOCK_SIZE + 1] {
            let data: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
            round_trip(&data, 15);
        }
    }

    #[test]
    fn round_trip_multi_block_with_remainder() {
        let data = vec![0x2Au8; 3 * BLOCK_SIZE + 17];
        round_trip(&data, 17);
    }

    #[test]
    fn rejects_negative_block_count() {
        let stamp = FileStamp {
            alg: *crate::frame::header::ALG_TAG,
            nblocks: -1,
            last_block_size: 0,
            w_bits: 15,
        };
        let mut buf = Vec::new();
        stamp.write_to(&mut buf).unwrap();
        let mut cursor = &buf[..];
        let mut out = Vec::new();
        let err = decompress(&mut cursor, &mut out).unwrap_err();
        assert!(matches!(err, PppError::Usage(_)));
    }

    #[test]
    fn rejects_oversized_last_block() {
        let stamp = FileStamp {
            alg: *crate::frame::header::ALG_TAG,
            nblocks: 0,
            last_block_size: BLOCK_SIZE as i32,
            w_bits: 15,
        };
        let mut buf = Vec::new();
        stamp.write_to(&mut buf).unwrap();
        let mut cursor = &buf[..];
        let mut out = Vec::new();
        let err = decompress(&mut cursor, &mut out).unwrap_err();
        assert!(matches!(err, PppError::Usage(_)));
    }

    #[test]
    fn decoder_reads_w_bits_from_header() {
        let mut sink = Cursor::new(Vec::new());
        let mut src: &[u8] = b"width should travel through the header";
        compress(&mut src, &mut sink, 18).unwrap();
        let encoded = sink.into_inner();
        let stamp =
            FileStamp::from_bytes(&encoded[..crate::frame::header::STAMP_SIZE].try_into().unwrap());
        assert_eq!(stamp.w_bits, 18);
    }
}
