use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use glycan_notation::{to_compact_notation, to_internal_notation};

/// Convert glycan sequences between compact and viewer-internal notation
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A file of newline-separated glycan sequences
    #[arg(short, long)]
    input_sequences: PathBuf,
    /// A file to write the converted sequences to (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Rewrite decorated sequences back to compact notation
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sequences = fs::read_to_string(&args.input_sequences)?;
    let converted = sequences
        .lines()
        .map(|sequence| {
            if args.compact {
                to_compact_notation(sequence)
            } else {
                to_internal_notation(sequence)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    match args.output {
        Some(path) => fs::write(path, converted)?,
        None => println!("{converted}"),
    }

    Ok(())
}
