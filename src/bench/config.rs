use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::formats::Format;
use crate::{BenchError, BenchResult};

pub const DEFAULT_INPUT_DIR: &str = "./temp/input_files";
pub const DEFAULT_OUTPUT_DIR: &str = "./temp/output_cpp";
pub const DEFAULT_STATS_DIR: &str = "./temp/stats";
pub const DEFAULT_STATS_FILE: &str = "cpp_stats.csv";

/// Where the benchmark reads from and writes to, and which formats it runs.
///
/// Built once at startup and handed to the driver by reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stats_dir: PathBuf,
    pub stats_file: String,
    pub formats: Vec<Format>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stats_dir: PathBuf::from(DEFAULT_STATS_DIR),
            stats_file: DEFAULT_STATS_FILE.to_string(),
            formats: Format::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Defaults rooted at `root` instead of the working directory.
    pub fn rooted_at(root: &Path) -> Self {
        BenchConfig {
            input_dir: root.join("input_files"),
            output_dir: root.join("output_cpp"),
            stats_dir: root.join("stats"),
            ..BenchConfig::default()
        }
    }

    pub fn with_formats(mut self, formats: impl Into<Vec<Format>>) -> Self {
        self.formats = formats.into();
        self
    }

    pub fn input_path(&self, format: Format) -> PathBuf {
        self.input_dir.join(data_file_name(format))
    }

    pub fn output_path(&self, format: Format) -> PathBuf {
        self.output_dir.join(data_file_name(format))
    }

    pub fn stats_path(&self) -> PathBuf {
        self.stats_dir.join(&self.stats_file)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.formats.is_empty() {
            return Err(BenchError::Message("config lists no formats".to_string()));
        }
        if let Some(dup) = self.formats.iter().enumerate().find_map(|(i, f)| self.formats[..i].contains(f).then_some(f)) {
            return Err(BenchError::Message(format!("format listed twice: {dup}")));
        }
        if self.stats_file.is_empty() {
            return Err(BenchError::Message("stats_file must not be empty".to_string()));
        }
        Ok(())
    }
}

fn data_file_name(format: Format) -> String {
    format!("data.{}", format.extension())
}

pub fn load_bench_config(path: &Path) -> BenchResult<BenchConfig> {
    let s = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    let cfg: BenchConfig = toml::from_str(&s).map_err(|e| BenchError::Message(format!("{}: {e}", path.display())))?;
    cfg.validate()?;
    Ok(cfg)
}
