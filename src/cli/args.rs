//! Argument parsing. Ported from the `argv[1][0] == 'c'` / `'d'` dispatch
//! and the `c[N]` width parsing in `lzpgt2.c`'s `main()`:
//!
//! ```c
//! if ( argv[1][0] == 'c' ) {
//!     mode = COMPRESS;
//!     if ( argv[1][1] == '\0' ) ppp_WBITS = 20;
//!     else ppp_WBITS = atoi(&argv[1][1]);
//!     if ( argv[1][1] == '0' || ppp_WBITS == 0 ) usage();
//!     if ( ppp_WBITS < 15 ) ppp_WBITS = 15;
//!     else if ( ppp_WBITS > 30 ) ppp_WBITS = 30;
//! }
//! else if ( argv[1][0] == 'd' ) {
//!     mode = DECOMPRESS;
//!     if ( argv[1][1] != '\0' ) usage();
//! }
//! else usage();
//! ```
//!
//! `clap` handles the surrounding positional/flag shape (input/output paths,
//! verbosity); the `c[N]`/`d` mode token itself is parsed by hand, the same
//! way the source does, since it does not fit clap's usual flag grammar.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::config::{clamp_wbits, WBITS_DEFAULT};

/// Compress-or-decompress mode, with the compress side carrying its
/// (already clamped) predictor width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// `c` or `c<N>`.
    Compress { w_bits: u32 },
    /// `d`.
    Decompress,
}

/// Fully parsed and validated command line.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub mode: OpMode,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Resolved display level (§4.8): `quiet` wins over `verbose` if both given.
    pub display_level: u32,
}

/// Raw clap surface. The `mode` field is the unparsed `c[N]`/`d` token;
/// [`parse_args`] turns it into an [`OpMode`].
#[derive(Parser, Debug)]
#[command(
    name = "ppp",
    version,
    about = "PPP/LZP: a single-context, order-k hashed predictor byte compressor"
)]
struct RawCli {
    /// Mode: 'c' or 'c<N>' to compress (N = table bits, 15..30, default 20), 'd' to decompress.
    mode: String,
    /// Input file path.
    input: PathBuf,
    /// Output file path.
    output: PathBuf,
    /// Increase verbosity (repeatable).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
    /// Suppress all but fatal errors.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Parses `argv` (excluding `argv[0]`) into a [`ParsedArgs`].
pub fn parse_args<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let raw = RawCli::try_parse_from(
        std::iter::once(std::ffi::OsString::from("ppp")).chain(argv.into_iter().map(Into::into)),
    )?;

    let mode = parse_mode_token(&raw.mode)?;

    let display_level = if raw.quiet {
        1
    } else {
        crate::cli::constants::DISPLAY_LEVEL_DEFAULT + raw.verbose as u32
    };

    Ok(ParsedArgs {
        mode,
        input: raw.input,
        output: raw.output,
        display_level,
    })
}

/// Parses the fused mode token (`"c"`, `"c20"`, `"d"`) the same way
/// `lzpgt2.c`'s `main()` does.
fn parse_mode_token(token: &str) -> anyhow::Result<OpMode> {
    let mut chars = token.chars();
    let head = chars
        .next()
        .ok_or_else(|| anyhow!("bad usage: empty mode"))?;
    let rest = chars.as_str();

    match head {
        'c' => {
            if rest.is_empty() {
                return Ok(OpMode::Compress {
                    w_bits: WBITS_DEFAULT,
                });
            }
            if rest.starts_with('0') {
                return Err(anyhow!("bad usage: table width must not start with 0"));
            }
            let n: u32 = rest
                .parse()
                .map_err(|_| anyhow!("bad usage: '{}' is not a valid table width", rest))?;
            if n == 0 {
                return Err(anyhow!("bad usage: table width must be nonzero"));
            }
            Ok(OpMode::Compress {
                w_bits: clamp_wbits(n),
            })
        }
        'd' => {
            if !rest.is_empty() {
                return Err(anyhow!("bad usage: 'd' takes no width suffix"));
            }
            Ok(OpMode::Decompress)
        }
        _ => Err(anyhow!("bad usage: mode must be 'c[N]' or 'd', got '{}'", token)),
    }
}
