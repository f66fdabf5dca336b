//! Binary entry point for the `ppp` command-line tool.
//!
//! Corresponds to `main()` in `lzpgt2.c`: parse the `c[N]`/`d` mode token,
//! open the source and sink, dispatch to the encoder or decoder, and report
//! byte counts, compression ratio and elapsed time on stderr.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use ppp::cli::{parse_args, OpMode};
use ppp::{displaylevel, PppError};

fn run() -> ppp::Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(argv).map_err(|e| PppError::Usage(e.to_string()))?;
    ppp::cli::constants::set_display_level(args.display_level);

    let start = ppp::timefn::get_time();

    let infile = File::open(&args.input).map_err(PppError::SourceOpen)?;
    let mut reader = BufReader::new(infile);

    match args.mode {
        OpMode::Compress { w_bits } => {
            // The sink must support rewind to back-patch the header (§5);
            // a plain `File` does, a `BufWriter` wrapping one would not.
            let mut writer = File::create(&args.output).map_err(PppError::SinkOpen)?;

            displaylevel!(
                3,
                "Prediction table size used ({} bits) = {} bytes",
                w_bits,
                1u64 << w_bits
            );
            displaylevel!(
                2,
                "Encoding [{} -> {}] ...",
                args.input.display(),
                args.output.display()
            );

            let stats = ppp::compress(&mut reader, &mut writer, w_bits)?;
            writer.flush().map_err(PppError::SinkWrite)?;

            let bytes_out = std::fs::metadata(&args.output)
                .map(|m| m.len())
                .unwrap_or(0);
            let ratio = if stats.bytes_in > 0 {
                (stats.bytes_in as f64 - bytes_out as f64) / stats.bytes_in as f64 * 100.0
            } else {
                0.0
            };
            displaylevel!(
                2,
                "done. {} ({}) -> {} ({}) in {:.2}s",
                args.input.display(),
                stats.bytes_in,
                args.output.display(),
                bytes_out,
                ppp::timefn::elapsed_secs(start)
            );
            displaylevel!(2, "compression ratio: {:.2}%", ratio);
        }
        OpMode::Decompress => {
            let outfile = File::create(&args.output).map_err(PppError::SinkOpen)?;
            let mut writer = BufWriter::new(outfile);

            displaylevel!(
                2,
                "Decoding [{} -> {}] ...",
                args.input.display(),
                args.output.display()
            );

            let stats = ppp::decompress(&mut reader, &mut writer)?;
            writer.flush().map_err(PppError::SinkWrite)?;

            displaylevel!(
                2,
                "done. {} -> {} ({} bytes) in {:.2}s",
                args.input.display(),
                args.output.display(),
                stats.bytes_out,
                ppp::timefn::elapsed_secs(start)
            );
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ppp: {e}");
        std::process::exit(1);
    }
}
