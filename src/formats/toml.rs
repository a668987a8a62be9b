//! TOML adapter.
//!
//! Records live in an array of tables named `data`, both when reading and
//! when writing. Files that name the array `people` are accepted on read.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Person;
use crate::{BenchError, BenchResult};

use super::{Format, FormatAdapter};

#[derive(Debug, Deserialize)]
struct TomlDocument {
    #[serde(alias = "people")]
    data: Vec<Person>,
}

#[derive(Debug, Serialize)]
struct TomlDocumentRef<'a> {
    data: &'a [Person],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

impl FormatAdapter for TomlFormat {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn read(&self, path: &Path) -> BenchResult<Vec<Person>> {
        let s = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let doc: TomlDocument = toml::from_str(&s).map_err(|e| BenchError::decode(Format::Toml, path, e))?;
        Ok(doc.data)
    }

    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()> {
        let s = toml::to_string(&TomlDocumentRef { data: people })
            .map_err(|e| BenchError::encode(Format::Toml, path, e))?;
        std::fs::write(path, s).map_err(|e| BenchError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_data_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.toml");
        std::fs::write(
            &path,
            "[[data]]\nid = 1\nname = \"Alice\"\naddress = \"1 Main St\"\nage = 30.5\n\n[[data]]\nid = 2\nname = \"Bob\"\naddress = \"X\"\nage = 40\n",
        )
        .unwrap();

        let people = TomlFormat.read(&path).unwrap();
        assert_eq!(
            people,
            vec![Person::new(1, "Alice", "1 Main St", 30.5), Person::new(2, "Bob", "X", 40.0)]
        );
    }

    #[test]
    fn test_read_accepts_people_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.toml");
        std::fs::write(&path, "[[people]]\nid = 9\nname = \"Eve\"\naddress = \"Z\"\nage = 2.5\n").unwrap();

        assert_eq!(TomlFormat.read(&path).unwrap(), vec![Person::new(9, "Eve", "Z", 2.5)]);
    }

    #[test]
    fn test_write_uses_data_table_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");

        TomlFormat.write(&[Person::new(1, "Alice", "1 Main St", 30.5)], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[[data]]"));
        assert!(!text.contains("people"));
        assert!(text.contains("age = 30.5"));
    }

    #[test]
    fn test_missing_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.toml");
        std::fs::write(&path, "[[rows]]\nid = 1\nname = \"A\"\naddress = \"B\"\nage = 1.0\n").unwrap();

        let err = TomlFormat.read(&path).unwrap_err();
        assert!(matches!(err, BenchError::Decode { format: Format::Toml, .. }));
    }
}
