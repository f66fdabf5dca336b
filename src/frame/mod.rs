//! The framer: file stamp (header) plus the top-level encode/decode
//! functions that compose it with the block codec into a complete stream.

pub mod compress;
pub mod decompress;
pub mod header;

pub use compress::compress;
pub use decompress::{decompress, DecodeStats};
pub use header::FileStamp;
