//! JSON adapter: a top-level array of person objects.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::Person;
use crate::{BenchError, BenchResult};

use super::{Format, FormatAdapter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl FormatAdapter for JsonFormat {
    fn format(&self) -> Format {
        Format::Json
    }

    fn read(&self, path: &Path) -> BenchResult<Vec<Person>> {
        let s = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        serde_json::from_str(&s).map_err(|e| BenchError::decode(Format::Json, path, e))
    }

    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()> {
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer(&mut w, people).map_err(|e| BenchError::encode(Format::Json, path, e))?;
        writeln!(w).map_err(|e| BenchError::io(path, e))?;
        w.flush().map_err(|e| BenchError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integer_age() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"[{"id":1,"name":"Bob","address":"X","age":40}]"#).unwrap();

        let people = JsonFormat.read(&path).unwrap();
        assert_eq!(people, vec![Person::new(1, "Bob", "X", 40.0)]);
    }

    #[test]
    fn test_write_typed_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        JsonFormat.write(&[Person::new(1, "Alice", "1 Main St", 30.5)], &path).unwrap();

        let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(v[0]["id"].is_u64());
        assert_eq!(v[0]["age"].as_f64(), Some(30.5));
    }

    #[test]
    fn test_missing_field_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"[{"id":1,"name":"Bob","address":"X"}]"#).unwrap();

        let err = JsonFormat.read(&path).unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_negative_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"[{"id":-1,"name":"Bob","address":"X","age":1}]"#).unwrap();

        assert!(JsonFormat.read(&path).is_err());
    }
}
