use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use uax_14_tables::{compile, emit};

// The data files are not included in the repository and have to be
// downloaded separately:
// https://www.unicode.org/Public/UCD/latest/ucd/LineBreak.txt
// https://www.unicode.org/Public/UCD/latest/ucd/EastAsianWidth.txt

/// Compile the UAX #14 line breaking tables into Rust source.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to LineBreak.txt
    #[arg(long)]
    line_break: PathBuf,

    /// Path to EastAsianWidth.txt
    #[arg(long)]
    east_asian_width: PathBuf,

    /// Where to write the generated tables
    #[arg(long, short)]
    out: PathBuf,

    /// Log each compilation stage
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let line_break = fs::read_to_string(&args.line_break)
        .with_context(|| format!("reading {}", args.line_break.display()))?;
    let east_asian_width = fs::read_to_string(&args.east_asian_width)
        .with_context(|| format!("reading {}", args.east_asian_width.display()))?;

    let tables = compile(&line_break, &east_asian_width).context("compiling tables")?;
    info!(
        "{} classes, {} materialized blocks",
        tables.alphabet().len(),
        tables.classes().dense_block_count()
    );

    // Write next to the destination and rename, so a failed run never
    // leaves a truncated table behind.
    let partial = args.out.with_extension("partial");
    {
        let mut f = BufWriter::new(
            File::create(&partial).with_context(|| format!("creating {}", partial.display()))?,
        );
        emit::write_tables(&mut f, &tables)?;
        f.flush()?;
    }
    fs::rename(&partial, &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!("wrote {}", args.out.display());
    Ok(())
}
