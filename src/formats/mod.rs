//! Format adapters.
//!
//! Each supported format is a `Format` variant paired with a `FormatAdapter`
//! implementation that reads a whole file into `Person` records and writes
//! records back out.

pub mod csv;
pub mod json;
pub mod toml;
pub mod xml;
pub mod yaml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Person;
use crate::{BenchError, BenchResult};

pub use self::csv::CsvFormat;
pub use self::json::JsonFormat;
pub use self::toml::TomlFormat;
pub use self::xml::XmlFormat;
pub use self::yaml::YamlFormat;

/// Read/write capability every format provides.
pub trait FormatAdapter: Send + Sync {
    /// The format this adapter handles.
    fn format(&self) -> Format;

    /// Parse the whole file at `path` into records, in file order.
    ///
    /// Fails on a missing file, malformed content or an absent field.
    fn read(&self, path: &Path) -> BenchResult<Vec<Person>>;

    /// Serialize `people` to `path`, replacing any existing file.
    ///
    /// The file is flushed before returning. The parent directory must
    /// already exist.
    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Csv,
    Json,
    Toml,
    Xml,
    Yaml,
}

impl Format {
    /// Every format, in benchmark order.
    pub const ALL: [Format; 5] = [Format::Csv, Format::Json, Format::Toml, Format::Xml, Format::Yaml];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
        }
    }

    pub fn adapter(self) -> &'static dyn FormatAdapter {
        match self {
            Format::Csv => &CsvFormat,
            Format::Json => &JsonFormat,
            Format::Toml => &TomlFormat,
            Format::Xml => &XmlFormat,
            Format::Yaml => &YamlFormat,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| BenchError::Message(format!("unknown format: {s}")))
    }
}
