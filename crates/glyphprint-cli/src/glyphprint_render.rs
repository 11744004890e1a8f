//! Single fingerprint render CLI
//!
//! Usage: glyphprint_render <HASH> [options]
//!
//! Example:
//!   glyphprint_render 0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef
//!   glyphprint_render <HASH> --size 240 --grid --output print.svg
//!   glyphprint_render <HASH> --describe

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use glyphprint::infra::render_target::{FileTarget, update_target};
use glyphprint::{DEFAULT_SIZE, Options, describe, generate};
use std::path::PathBuf;
use tracing::info;

/// Render the visual fingerprint of a 64-character hex hash as SVG
#[derive(Debug, Parser)]
#[command(name = "glyphprint_render", version)]
struct Args {
    /// 64-character hex hash (case-insensitive)
    hash: String,

    /// Canvas size in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: f64,

    /// Draw the diagnostic guide grid
    #[arg(long)]
    grid: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the derived parameters instead of the SVG
    #[arg(long)]
    describe: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let options = Options::default()
        .with_size(args.size)
        .with_grid(args.grid);

    if args.describe {
        let fingerprint = describe(&args.hash, &options)
            .with_context(|| format!("cannot describe '{}'", args.hash))?;
        println!("{}", fingerprint);
        return Ok(());
    }

    match args.output {
        Some(path) => {
            let mut target = FileTarget::new(&path);
            update_target(Some(&mut target), Some(args.hash.as_str()), Some(options.size), options.show_grid)
                .with_context(|| format!("cannot render '{}' to {}", args.hash, path.display()))?;
            info!(path = %path.display(), "fingerprint written");
            println!("Saved {}", path.display());
        }
        None => {
            let svg = generate(&args.hash, &options)
                .with_context(|| format!("cannot render '{}'", args.hash))?;
            println!("{}", svg);
        }
    }

    Ok(())
}
