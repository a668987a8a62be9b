//! Runs every configured format through the harness and writes the stats file.

use tracing::info;

use crate::core::FormatTiming;
use crate::storage::StatsExporter;
use crate::{BenchError, BenchResult};

use super::config::BenchConfig;
use super::harness::{Timer, WallClock, measure_and_repeat_with};

pub fn run(config: &BenchConfig) -> BenchResult<Vec<FormatTiming>> {
    run_with(config, &mut WallClock)
}

/// Benchmark each format in `config.formats` order, one after another.
///
/// For each format the input file is read `REPEATS` times, then the records
/// from the last read are written `REPEATS` times. Progress goes to stdout.
/// The first failure aborts the run before the stats file is written.
pub fn run_with<C: Timer>(config: &BenchConfig, timer: &mut C) -> BenchResult<Vec<FormatTiming>> {
    config.validate()?;
    for dir in [&config.output_dir, &config.stats_dir] {
        std::fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))?;
    }

    let mut timings = Vec::with_capacity(config.formats.len());
    for &format in &config.formats {
        println!("Extension = {format}");
        let adapter = format.adapter();

        let input = config.input_path(format);
        info!(%format, path = %input.display(), "reading");
        let read = measure_and_repeat_with(timer, || adapter.read(&input))?;
        println!("Read duration (ms) = {}", read.min_ms);

        let people = read.output;
        let output = config.output_path(format);
        info!(%format, path = %output.display(), records = people.len(), "writing");
        let write = measure_and_repeat_with(timer, || adapter.write(&people, &output))?;
        println!("Write duration (ms) = {}", write.min_ms);

        timings.push(FormatTiming {
            format,
            read_ms: read.min_ms,
            write_ms: write.min_ms,
            read_samples_ms: read.samples_ms,
            write_samples_ms: write.samples_ms,
            records: people.len(),
        });
    }

    let stats_path = config.stats_path();
    println!("Writing stats to {}", stats_path.display());
    StatsExporter::new().export(&timings, &stats_path)?;

    Ok(timings)
}
