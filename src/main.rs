//! Sectorscan — daily change report for a sectored project tree.
//!
//! Thin binary entry point. All logic lives in the `sectorscan-core` crate.
use anyhow::Context;
use clap::Parser;
use sectorscan_core::{report, scanner, state, ScanConfig};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sectorscan", version, about)]
struct Args {
    /// Project root whose prefixed subdirectories are scanned as sectors.
    /// Defaults to the current directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// State file. Defaults to `<root>/.sectorscan/state.json`.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let mut config = ScanConfig::new(root);
    if let Some(state_file) = args.state {
        config = config.with_state_file(state_file);
    }

    tracing::info!("Sectorscan starting in {}", config.root.display());

    let previous = state::load(&config).context("cannot load previous scan state")?;
    let run = scanner::run_scan(&config, &previous).context("scan aborted")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &run, chrono::Local::now())
        .context("cannot write report")?;
    out.flush().context("cannot write report")?;

    state::save(&config, &run.store).context("cannot save scan state")?;

    let failed = run.failed_count();
    if failed > 0 {
        anyhow::bail!("{failed} sector(s) could not be scanned; their previous state was kept");
    }
    Ok(())
}
