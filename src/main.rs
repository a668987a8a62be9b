#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use serialization_bench::BenchResult;
use serialization_bench::bench::{self, BenchConfig, load_bench_config};
use serialization_bench::storage::{RunReport, write_json};

#[derive(Parser, Debug)]
#[command(name = "serialization-bench")]
#[command(about = "Read/write benchmark for CSV, JSON, TOML, XML and YAML", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set SERIALIZATION_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    /// TOML file overriding input_dir, output_dir, stats_dir, stats_file or formats
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a machine-readable JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

const LOG_ENV: &str = "SERIALIZATION_BENCH_LOG";

/// Logs go to stderr; stdout carries the progress lines.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(format!("serialization_bench={level}")));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

fn run(cli: Cli) -> BenchResult<()> {
    let config = match &cli.config {
        Some(path) => load_bench_config(path)?,
        None => BenchConfig::default(),
    };

    let timings = bench::run(&config)?;

    if let Some(json_path) = cli.json {
        let report = RunReport::build_with_system_info(&config, &timings)?;
        write_json(&json_path, &report)?;
    }

    Ok(())
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
