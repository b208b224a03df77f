//! Reduce the vertex count of a PLY file by uniform random sampling
//!
//! Usage: reduce_ply bunny.ply --fraction 0.3 --seed 42
//!
//! Writes `reduced_<name>` next to the input unless `--output` is given.

use anyhow::{bail, Context, Result};
use clap::Parser;
use plydecimate_core::DEFAULT_TARGET_ELEMENT;
use plydecimate_io::is_ply_path;
use plydecimate_simplification::{default_output_path, reduce_file, ReduceOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reduce_ply", about = "Randomly decimate the points of a PLY file")]
struct Args {
    /// Input PLY file
    input: PathBuf,

    /// Output file (defaults to reduced_<input name>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fraction of records to keep, in (0, 1]
    #[arg(short, long, default_value_t = 0.5)]
    fraction: f64,

    /// Element to decimate
    #[arg(short, long, default_value = DEFAULT_TARGET_ELEMENT)]
    element: String,

    /// Seed for reproducible sampling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Accept inputs without a .ply extension
    #[arg(long)]
    force: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.force && !is_ply_path(&args.input) {
        bail!("{} is not a .ply file (use --force to read it anyway)", args.input.display());
    }

    let options = ReduceOptions {
        element: args.element,
        retention_fraction: args.fraction,
        seed: args.seed,
    };
    options.validate()?;
    tracing::debug!(?options, "reduce options");

    let output = args.output.unwrap_or_else(|| default_output_path(&args.input));
    let summary = reduce_file(&args.input, &output, &options)
        .with_context(|| format!("failed to reduce {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Reduced {}: {} -> {} records ({:.1}% kept)",
                 summary.element,
                 summary.original_count,
                 summary.retained_count,
                 summary.effective_fraction * 100.0);
        println!("Wrote {}", output.display());
    }

    Ok(())
}
