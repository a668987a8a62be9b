use serde::{Deserialize, Serialize};

use crate::formats::Format;

/// Read and write timings for one format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatTiming {
    pub format: Format,
    /// Fastest read, in milliseconds.
    pub read_ms: f64,
    /// Fastest write, in milliseconds.
    pub write_ms: f64,
    pub read_samples_ms: Vec<f64>,
    pub write_samples_ms: Vec<f64>,
    /// Records parsed from the input file.
    pub records: usize,
}
