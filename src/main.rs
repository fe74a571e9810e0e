// src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stinsim::simulation::csv::write_all_tables;
use stinsim::simulation::load_parameters::{load_constants, load_scenarios};
use stinsim::simulation::summary::{summarize_output, write_summary};
use stinsim::run_all;

#[derive(Parser, Debug)]
#[command(
    name = "stinsim",
    about = "Path loss and SINR sweeps for terrestrial and LEO satellite links"
)]
struct Args {
    /// Link constants YAML (built-in reference values if omitted)
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Scenario tables YAML (built-in reference scenarios if omitted)
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Directory for the CSV outputs
    #[arg(short, long, default_value = "data")]
    output_dir: PathBuf,

    /// Also write summary.json
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG が設定されていればそちらを優先
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 設定とシナリオの読み込み
    let constants = load_constants(args.constants.as_deref())
        .with_context(|| format!("failed to load constants {:?}", args.constants))?;
    let scenarios = load_scenarios(args.scenarios.as_deref())
        .with_context(|| format!("failed to load scenarios {:?}", args.scenarios))?;

    // 掃引の実行
    let output = run_all(&constants, &scenarios).context("simulation failed")?;

    // CSV出力
    let written = write_all_tables(&args.output_dir, &output)
        .with_context(|| format!("failed to write CSV files to {}", args.output_dir.display()))?;

    let summaries = summarize_output(&output);
    if args.summary {
        let path = args.output_dir.join("summary.json");
        write_summary(&path, &summaries)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!("Simulation complete. Results:");
    for path in &written {
        info!("  {}", path.display());
    }

    Ok(())
}
