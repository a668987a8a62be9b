//! Repeat-and-take-the-minimum timing.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{BenchError, BenchResult};

/// Number of timed runs per operation.
pub const REPEATS: usize = 3;

/// Result of timing one operation `REPEATS` times.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    /// Fastest run, in milliseconds.
    pub min_ms: f64,
    /// Every run in execution order, in milliseconds.
    pub samples_ms: Vec<f64>,
    /// Output of the last run.
    pub output: T,
}

/// Source of elapsed-time readings for the harness.
pub trait Timer {
    /// Run `op` and return how long it took in milliseconds with its output.
    fn time<T>(&mut self, op: impl FnOnce() -> T) -> (f64, T);
}

/// Monotonic wall clock with microsecond resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Timer for WallClock {
    fn time<T>(&mut self, op: impl FnOnce() -> T) -> (f64, T) {
        let start = Instant::now();
        let out = op();
        (duration_ms(start.elapsed()), out)
    }
}

/// Whole microseconds divided by 1000.
pub fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_micros() as f64 / 1000.0
}

pub fn measure_and_repeat<T, F>(op: F) -> BenchResult<Measurement<T>>
where
    F: FnMut() -> BenchResult<T>,
{
    measure_and_repeat_with(&mut WallClock, op)
}

/// Run `op` `REPEATS` times under `timer`. The first failing run aborts the
/// measurement and its error is returned unchanged.
pub fn measure_and_repeat_with<C, T, F>(timer: &mut C, mut op: F) -> BenchResult<Measurement<T>>
where
    C: Timer,
    F: FnMut() -> BenchResult<T>,
{
    let mut samples_ms = Vec::with_capacity(REPEATS);
    let mut output = None;
    for run in 0..REPEATS {
        let (elapsed_ms, result) = timer.time(&mut op);
        let value = result?;
        debug!(run, elapsed_ms, "timed run");
        samples_ms.push(elapsed_ms);
        output = Some(value);
    }
    let min_ms = samples_ms.iter().copied().fold(f64::INFINITY, f64::min);
    let output = output.ok_or_else(|| BenchError::Message("no timed runs".to_string()))?;
    Ok(Measurement { min_ms, samples_ms, output })
}
