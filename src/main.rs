use std::io::{self, BufWriter};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::OsRng;

use garble::{units, Options};

#[derive(Parser)]
#[command(
    name = "garble",
    version,
    about = "Write a deliberately damaged copy of an archive stream, for fault-injection testing",
    long_about = None
)]
struct Cli {
    /// Insert two blocks of random bytes after the stream
    #[arg(short = 'A', long)]
    after: bool,

    /// Insert two blocks of random bytes before the stream
    #[arg(short = 'B', long)]
    before: bool,

    /// Preserve this many bytes of the header untouched
    #[arg(short, long, default_value = "64")]
    preserve: String,

    /// Corruption density, in corruptions per input byte
    #[arg(short, long, default_value = "0.0")]
    corrupt: String,

    /// Split the stream at this many points
    #[arg(short = 'S', long, default_value = "0")]
    split: String,

    /// Insert this much random trash at each split point
    #[arg(short, long, default_value = "1024")]
    trash: String,

    /// Size hint used to place the random offsets
    #[arg(short, long, default_value = "0")]
    size: String,

    /// Block size for each read/transform/write cycle
    #[arg(short, long, default_value = "1024")]
    block: String,

    /// Report each injected corruption and split on standard error
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = parse_options(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    garble::run(stdin.lock(), output, OsRng, opts)?;
    Ok(())
}

/// Validate every option up front; nothing touches stdin until all of them
/// have parsed.
fn parse_options(cli: &Cli) -> Result<Options> {
    let corrupt: f64 = cli
        .corrupt
        .parse()
        .map_err(|_| anyhow!("invalid corrupt ratio {}", cli.corrupt))?;
    Ok(Options {
        before: cli.before,
        after: cli.after,
        preserve: units::parse_size(&cli.preserve).context("bad --preserve value")?,
        corrupt,
        split: units::parse_size(&cli.split).context("bad --split value")?,
        trash: units::parse_size(&cli.trash).context("bad --trash value")?,
        size: units::parse_size(&cli.size).context("bad --size value")?,
        block: units::parse_size(&cli.block).context("bad --block value")?,
        verbose: cli.verbose,
    })
}
