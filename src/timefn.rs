//! Portable monotonic timer, used to report elapsed wall-clock time the way
//! the source's `clock()`/`CLOCKS_PER_SEC` reporting does in each
//! `lzpgt*.c`'s `main()`.
//!
//! Rust's `std::time::Instant` is monotonic and thread-safe on every
//! supported platform, so there is no platform-specific plumbing to port.

use std::time::Instant;

/// Opaque timestamp. Only meaningful relative to another `TimeT` from the
/// same process.
#[derive(Clone, Copy)]
pub struct TimeT(Instant);

/// Returns the current monotonic timestamp.
pub fn get_time() -> TimeT {
    TimeT(Instant::now())
}

/// Seconds elapsed since `start`, as a float (matches the source's
/// `(double) (clock()-start_time) / CLOCKS_PER_SEC`).
pub fn elapsed_secs(start: TimeT) -> f64 {
    start.0.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_nonnegative() {
        let start = get_time();
        assert!(elapsed_secs(start) >= 0.0);
    }
}
