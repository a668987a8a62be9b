//! YAML adapter: a top-level sequence of person mappings.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::Person;
use crate::{BenchError, BenchResult};

use super::{Format, FormatAdapter};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl FormatAdapter for YamlFormat {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn read(&self, path: &Path) -> BenchResult<Vec<Person>> {
        let s = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        serde_yaml::from_str(&s).map_err(|e| BenchError::decode(Format::Yaml, path, e))
    }

    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()> {
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut w = BufWriter::new(file);
        serde_yaml::to_writer(&mut w, people).map_err(|e| BenchError::encode(Format::Yaml, path, e))?;
        w.flush().map_err(|e| BenchError::io(path, e))
    }
}
