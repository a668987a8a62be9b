pub mod bench;
pub mod core;
pub mod formats;
pub mod storage;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formats::Format;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Message(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {format} from {}: {source}", .path.display())]
    Decode {
        format: Format,
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("failed to encode {format} to {}: {source}", .path.display())]
    Encode {
        format: Format,
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl BenchError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        BenchError::Io { path: path.to_path_buf(), source }
    }

    pub fn decode(format: Format, path: &Path, source: impl Into<BoxError>) -> Self {
        BenchError::Decode { format, path: path.to_path_buf(), source: source.into() }
    }

    pub fn encode(format: Format, path: &Path, source: impl Into<BoxError>) -> Self {
        BenchError::Encode { format, path: path.to_path_buf(), source: source.into() }
    }
}

pub type BenchResult<T> = Result<T, BenchError>;

/// Host details recorded in the JSON run report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SystemInfo {
    pub cpu_model: Option<String>,
    pub cpu_cores_logical: Option<usize>,
    pub cpu_cores_physical: Option<usize>,
    pub total_ram_bytes: Option<u64>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
}

impl SystemInfo {
    /// Probe CPU and memory only; processes and disks are never scanned.
    pub fn collect() -> Self {
        use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
        let sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );
        SystemInfo {
            cpu_model: sys.cpus().first().map(|c| c.brand().trim().to_string()).filter(|b| !b.is_empty()),
            cpu_cores_logical: Some(sys.cpus().len()).filter(|n| *n > 0),
            cpu_cores_physical: sys.physical_core_count(),
            total_ram_bytes: Some(sys.total_memory()).filter(|b| *b > 0),
            os: System::name(),
            os_version: System::os_version(),
            kernel_version: System::kernel_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_format_and_path() {
        let err = BenchError::decode(Format::Yaml, Path::new("in/data.yaml"), "bad indent");
        assert_eq!(err.to_string(), "failed to decode yaml from in/data.yaml: bad indent");
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BenchError::io(Path::new("temp/stats"), source);
        assert_eq!(err.to_string(), "temp/stats: gone");
    }
}
