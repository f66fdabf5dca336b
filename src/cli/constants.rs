//! Verbosity-gated diagnostics. Ported from the `displayLevel`
//! global/`DISPLAYLEVEL` macro convention the `lzpgt*.c` sources lean on
//! (via their shared `fprintf(stderr, ...)` calls), generalized to a
//! crate-wide atomic so library and binary callers share one knob.
//!
//! Levels: 0 = silent, 1 = errors only, 2 = normal (default), 3+ = verbose.

use std::sync::atomic::{AtomicU32, Ordering};

/// Default verbosity: normal progress/summary output, no per-block detail.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`. Equivalent to the
/// source's `DISPLAYLEVEL(l, ...)` macro.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_normal() {
        assert_eq!(display_level(), DISPLAY_LEVEL_DEFAULT);
    }

    #[test]
    fn level_round_trips() {
        let prev = display_level();
        set_display_level(4);
        assert_eq!(display_level(), 4);
        set_display_level(prev);
    }
}
