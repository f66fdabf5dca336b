// config.rs — Compile-time configuration constants.
// Migrated from the WBITS/PPP_BLOCKBITS #defines shared by lzpgt.c, lzpgt2.c,
// lzpgt6.c and lzpgt7.c.
//
// The four source variants pick different (WBITS, PPP_BLOCKBITS) pairs at
// compile time. This crate keeps PPP_BLOCKBITS fixed per build (matching the
// source) but makes WBITS a runtime, header-carried parameter (matching the
// configurable `lzpgt2.c`/`lzpgt7.c` variants), since that is a strict
// superset of the fixed-table variants.

/// `PPP_BLOCKBITS`. Must be >= 3 so a full block is always a whole number of
/// bytes (`BLOCK_SIZE % 8 == 0`). Matches the compact source variants
/// (`lzpgt.c`, `lzpgt2.c`), which use 15 rather than the 20 used by the
/// larger-block variants (`lzpgt6.c`, `lzpgt7.c`).
pub const BLOCK_BITS: u32 = 15;

/// `PPP_BLOCKSIZE` — the number of input bytes per full block.
pub const BLOCK_SIZE: usize = 1 << BLOCK_BITS;

/// Minimum allowed predictor table width, in bits.
pub const WBITS_MIN: u32 = 15;

/// Maximum allowed predictor table width, in bits.
pub const WBITS_MAX: u32 = 30;

/// Default predictor table width used when the CLI is given no explicit size.
/// Corresponds to `ppp_WBITS = 20` in `lzpgt2.c`'s `main()`.
pub const WBITS_DEFAULT: u32 = 20;

/// Clamp a requested predictor width into `[WBITS_MIN, WBITS_MAX]`.
/// Mirrors the clamping in `lzpgt2.c`: `if (ppp_WBITS < 15) ppp_WBITS = 15;
/// else if (ppp_WBITS > 30) ppp_WBITS = 30;`.
#[inline]
pub fn clamp_wbits(w_bits: u32) -> u32 {
    w_bits.clamp(WBITS_MIN, WBITS_MAX)
}
