//! Batch fingerprint render CLI
//!
//! Usage: glyphprint_batch <HASH_LIST> [--out-dir <PATH>] [--size N] [--grid]
//!
//! The hash list holds one hash per line; blank lines and lines starting
//! with '#' are skipped. One `{hash}.svg` is written per valid hash.
//!
//! Example:
//!   glyphprint_batch hashes.txt --out-dir ./prints

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use glyphprint::infra::svg_io::{get_output_path, load_hash_list, save_svg};
use glyphprint::{DEFAULT_SIZE, Options};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use glyphprint::render_batch_parallel_with_progress as render_with_progress;
#[cfg(not(feature = "parallel"))]
use glyphprint::render_batch_with_progress as render_with_progress;

/// Progress is printed every this many hashes
const PROGRESS_INTERVAL: usize = 100;

/// Render every hash of a list to SVG files
#[derive(Debug, Parser)]
#[command(name = "glyphprint_batch", version)]
struct Args {
    /// File with one 64-character hex hash per line
    hash_list: PathBuf,

    /// Output directory
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Canvas size in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: f64,

    /// Draw the diagnostic guide grid
    #[arg(long)]
    grid: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let hashes = load_hash_list(&args.hash_list)
        .with_context(|| format!("cannot read hash list {}", args.hash_list.display()))?;
    let options = Options::default()
        .with_size(args.size)
        .with_grid(args.grid);
    options.validate()?;

    println!("Rendering {} fingerprint(s)...", hashes.len());
    #[cfg(feature = "parallel")]
    println!("Using rayon for parallel rendering.");
    let start = Instant::now();

    let progress_callback = |current: usize, total: usize| {
        if current.is_multiple_of(PROGRESS_INTERVAL) || current == total {
            let progress = if total > 0 {
                (current as f64 / total as f64) * 100.0
            } else {
                100.0
            };
            print!("\r[Render] Progress: {:.2}% ({}/{})", progress, current, total);
            let _ = io::stdout().flush();
        }
    };

    let results = render_with_progress(&hashes, &options, progress_callback);
    println!();

    let mut written = 0usize;
    let mut failed = 0usize;
    for (hash, result) in hashes.iter().zip(results) {
        match result {
            Ok(svg) => {
                let path = get_output_path(&args.out_dir, hash);
                save_svg(&path, &svg)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                debug!(path = %path.display(), "fingerprint written");
                written += 1;
            }
            Err(e) => {
                warn!(hash = %hash, error = %e, "skipping invalid hash");
                eprintln!("Error: '{}': {}", hash, e);
                failed += 1;
            }
        }
    }

    println!(
        "Wrote {} file(s) to {} in {:.2} seconds.",
        written,
        args.out_dir.display(),
        start.elapsed().as_secs_f64()
    );

    if failed > 0 {
        bail!("{} hash(es) could not be rendered", failed);
    }

    Ok(())
}
