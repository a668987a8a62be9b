//! Benchmark configuration, timing harness and the driver loop.

pub mod config;
pub mod driver;
pub mod harness;

pub use config::{BenchConfig, load_bench_config};
pub use driver::{run, run_with};
pub use harness::{Measurement, REPEATS, Timer, WallClock, measure_and_repeat, measure_and_repeat_with};
