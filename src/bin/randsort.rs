use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randsort::report;
use randsort::DataType;

/// Sorts a file of values with randomized quicksort, then selects every rank with quickselect.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace-separated input values
    #[arg(index = 1)]
    input_file: PathBuf,

    /// Element type: int, double, char, or string
    #[arg(index = 2)]
    data_type: DataType,

    /// Seed for the shuffles, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let text = fs::read_to_string(&args.input_file)
        .with_context(|| format!("could not read {}", args.input_file.display()))?;

    let mut rng = match args.seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::run(args.data_type, &text, &mut rng, &mut out)
        .with_context(|| format!("could not process {}", args.input_file.display()))?;
    out.flush()?;
    Ok(())
}
