//! `zkbench` — render the zkVM benchmark comparison charts.
//!
//! Run with no arguments to reproduce the stock charts from the built-in
//! sample dataset:
//!
//! ```text
//! zkbench
//! zkbench --output-dir charts --data measurements.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use yansi::Paint;
use zkbench_charts::render_all;
use zkbench_report::Dataset;

#[derive(Debug, Parser)]
#[command(name = "zkbench", version, about = "Render zkVM benchmark comparison charts")]
struct Args {
    /// Directory the chart files are written to (created if missing).
    #[arg(long, env = "ZKBENCH_OUTPUT_DIR", default_value = "charts")]
    output_dir: PathBuf,

    /// JSON file with an array of benchmark records. Defaults to the
    /// built-in sample dataset.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logger();
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let dataset = load_dataset(args.data.as_deref())?;
    debug!(records = dataset.len(), "dataset loaded");

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;

    println!("Generating zkVM benchmark charts...");
    println!();

    for path in render_all(&dataset, &args.output_dir)? {
        println!("Saved: {}", path.display());
    }

    println!();
    println!("{}", "All charts generated successfully!".green());
    println!("Check the '{}' directory for output files.", args.output_dir.display());
    Ok(())
}

fn load_dataset(path: Option<&std::path::Path>) -> Result<Dataset> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading dataset from {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing dataset from {}", path.display()))
        }
        None => Ok(Dataset::sample()),
    }
}

fn init_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();
}
