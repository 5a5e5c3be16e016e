//! Command-line front end: parse → digest each file → output.

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Opts;
use dupdigest::Digester;
use output::{print_human, print_json, DigestRow};

fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(opts.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let digester: Digester = Digester::default();
    let t0 = std::time::Instant::now();

    let mut rows: Vec<DigestRow> = Vec::with_capacity(opts.files.len());
    let mut failed = 0usize;
    for path in &opts.files {
        match digester.get_digest(path, opts.thorough) {
            Ok(d) => rows.push(DigestRow::new(path.clone(), &d)),
            Err(e) => {
                failed += 1;
                warn!("{e}");
            }
        }
    }
    info!(
        files = rows.len(),
        failed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        thorough = opts.thorough,
        "digest pass done"
    );

    if opts.json {
        print_json(&rows).context("writing JSON output failed")?;
    } else {
        print_human(&rows, failed, opts.quiet);
    }

    // Non-zero exit code if any file could not be digested
    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
