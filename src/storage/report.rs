//! Machine-readable JSON report of a whole run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bench::config::BenchConfig;
use crate::bench::harness::REPEATS;
use crate::core::FormatTiming;
use crate::formats::Format;
use crate::{BenchError, BenchResult, SystemInfo};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatReport {
    pub format: Format,
    pub input_path: PathBuf,
    pub input_sha256: String,
    pub input_bytes: u64,
    pub output_path: PathBuf,
    pub records: usize,
    pub read_ms: f64,
    pub write_ms: f64,
    pub read_samples_ms: Vec<f64>,
    pub write_samples_ms: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: String,
    pub tool_version: String,
    pub repeats: usize,
    pub system: Option<SystemInfo>,
    pub formats: Vec<FormatReport>,
}

/// sha256 hex digest and size of the file at `path`.
fn fingerprint(path: &Path) -> BenchResult<(String, u64)> {
    let bytes = std::fs::read(path).map_err(|e| BenchError::io(path, e))?;
    Ok((sha256::digest(bytes.as_slice()), bytes.len() as u64))
}

fn rfc3339_now() -> BenchResult<String> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|e| BenchError::Message(format!("failed to format timestamp: {e}")))
}

impl RunReport {
    /// Assemble a report for `timings`, fingerprinting each input file.
    ///
    /// Input files are re-read here, after all timing is done.
    pub fn build(config: &BenchConfig, timings: &[FormatTiming], system: Option<SystemInfo>) -> BenchResult<Self> {
        let formats = timings
            .iter()
            .map(|t| -> BenchResult<FormatReport> {
                let input_path = config.input_path(t.format);
                let (input_sha256, input_bytes) = fingerprint(&input_path)?;
                Ok(FormatReport {
                    format: t.format,
                    input_sha256,
                    input_bytes,
                    input_path,
                    output_path: config.output_path(t.format),
                    records: t.records,
                    read_ms: t.read_ms,
                    write_ms: t.write_ms,
                    read_samples_ms: t.read_samples_ms.clone(),
                    write_samples_ms: t.write_samples_ms.clone(),
                })
            })
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(RunReport {
            timestamp: rfc3339_now()?,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            repeats: REPEATS,
            system,
            formats,
        })
    }

    /// Like `build`, with host details filled in.
    pub fn build_with_system_info(config: &BenchConfig, timings: &[FormatTiming]) -> BenchResult<Self> {
        Self::build(config, timings, Some(SystemInfo::collect()))
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> BenchResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))?;
        }
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| BenchError::Message(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| BenchError::io(path, e))
}
