//! Print the header and element summary of a PLY file
//!
//! Usage: inspect_ply <ply_file>

use anyhow::{Context, Result};
use clap::Parser;
use plydecimate_core::PropertyType;
use plydecimate_io::PlyReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inspect_ply", about = "Show the structure of a PLY file")]
struct Args {
    /// PLY file to inspect
    input: PathBuf,

    /// Number of leading records to print per element
    #[arg(short, long, default_value_t = 3)]
    records: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let doc = PlyReader::read_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    println!("File: {}", args.input.display());
    println!("  Format: {} {}", doc.format, doc.version);
    for comment in &doc.comments {
        println!("  comment: {}", comment);
    }
    for info in &doc.obj_info {
        println!("  obj_info: {}", info);
    }
    println!();

    for element in doc.elements() {
        println!("{} (count: {})", element.name, element.len());
        for property in element.properties() {
            match property.property_type {
                PropertyType::Scalar(ty) => println!("    - {} ({})", property.name, ty),
                PropertyType::List { count, item } => {
                    println!("    - {} (list of {}, {} count)", property.name, item, count)
                }
            }
        }
        for (i, record) in element.records().iter().take(args.records).enumerate() {
            println!("    [{}] {:?}", i, record.values());
        }
        if element.len() > args.records {
            println!("    ... and {} more", element.len() - args.records);
        }
    }

    Ok(())
}
