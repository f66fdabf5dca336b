//! Top-level stream encoder: writes the placeholder stamp, runs the block
//! encoder over the whole source, then rewrites the stamp with the final
//! counts. Equivalent to the compress branch of `main()` across the
//! `lzpgt*.c` family (placeholder write, `compress_LZP`, `flush_put_buffer`,
//! rewind, final stamp write).

use std::io::{Read, Seek, SeekFrom, Write};

use crate::bitio::BitOutStream;
use crate::block::{BlockEncoder, EncodeStats};
use crate::config::clamp_wbits;
use crate::error::{PppError, Result};
use crate::frame::header::FileStamp;
use crate::predictor::PredictorTable;

/// Compresses `source` to `sink` at the given predictor width.
///
/// `sink` must support [`Seek`] — the format requires rewinding after
/// encoding to back-patch the header with the final block counts (§4.6,
/// §5 "the sink must support rewind on encode").
///
/// Returns the [`EncodeStats`] recorded during the run.
pub fn compress<R: Read, W: Write + Seek>(
    source: &mut R,
    sink: &mut W,
    w_bits: u32,
) -> Result<EncodeStats> {
    let w_bits = clamp_wbits(w_bits);

    // Placeholder stamp (§4.6 "write header placeholder").
    FileStamp::placeholder(w_bits).write_to(sink)?;

    let mut table = PredictorTable::new(w_bits)?;
    let mut encoder = BlockEncoder::new(&mut table);
    let mut bits = BitOutStream::new();
    encoder.encode(source, &mut bits)?;
    bits.flush(sink)?;

    let stats = encoder.stats();

    // Back-patch (§4.6 "rewrite header").
    sink.seek(SeekFrom::Start(0)).map_err(PppError::SinkOpen)?;
    let final_stamp = FileStamp {
        alg: *crate::frame::header::ALG_TAG,
        nblocks: stats.nblocks,
        last_block_size: stats.last_block_size,
        w_bits: w_bits as i32,
    };
    final_stamp.write_to(sink)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A `Cursor<Vec<u8>>` implements `Write + Seek`, standing in for the
    /// real file handle the format requires (§5).
    fn compress_to_vec(data: &[u8], w_bits: u32) -> (Vec<u8>, EncodeStats) {
        let mut sink = Cursor::new(Vec::new());
        let mut src = data;
        let stats = compress(&mut src, &mut sink, w_bits).unwrap();
        (sink.into_inner(), stats)
    }

    #[test]
    fn header_is_written_twice_with_final_counts() {
        let (bytes, stats) = compress_to_vec(b"hello, hello, hello", 15);
        assert!(bytes.len() >= crate::frame::header::STAMP_SIZE);
        let stamp =
            FileStamp::from_bytes(&bytes[..crate::frame::header::STAMP_SIZE].try_into().unwrap());
        assert_eq!(stamp.nblocks, stats.nblocks);
        assert_eq!(stamp.last_block_size, stats.last_block_size);
        assert_eq!(stamp.w_bits, 15);
    }

    #[test]
    fn empty_input_is_header_only() {
        let (bytes, stats) = compress_to_vec(b"", 15);
        assert_eq!(bytes.len(), crate::frame::header::STAMP_SIZE);
        assert_eq!(stats.nblocks, 0);
        assert_eq!(stats.last_block_size, 0);
    }

    #[test]
    fn width_is_clamped_before_use() {
        let (bytes, _) = compress_to_vec(b"abc", 3);
        let stamp =
            FileStamp::from_bytes(&bytes[..crate::frame::header::STAMP_SIZE].try_into().unwrap());
        assert_eq!(stamp.w_bits, 15);
    }
}
