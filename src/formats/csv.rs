//! CSV adapter.
//!
//! Reads require a header row naming `id,name,address,age`; columns are
//! matched by name, so their order in the file does not matter. Writes emit
//! the same header so the output can be read back.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::Person;
use crate::{BenchError, BenchResult};

use super::{Format, FormatAdapter};

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormat;

impl FormatAdapter for CsvFormat {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn read(&self, path: &Path) -> BenchResult<Vec<Person>> {
        let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
        reader
            .deserialize::<Person>()
            .map(|row| row.map_err(|e| BenchError::decode(Format::Csv, path, e)))
            .collect()
    }

    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()> {
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        writer
            .write_record(["id", "name", "address", "age"])
            .map_err(|e| BenchError::encode(Format::Csv, path, e))?;
        for person in people {
            writer
                .serialize(person)
                .map_err(|e| BenchError::encode(Format::Csv, path, e))?;
        }
        writer.flush().map_err(|e| BenchError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,name,address,age\n1,Alice,1 Main St,30.5\n2,Bob,X,40\n").unwrap();

        let people = CsvFormat.read(&path).unwrap();
        assert_eq!(
            people,
            vec![Person::new(1, "Alice", "1 Main St", 30.5), Person::new(2, "Bob", "X", 40.0)]
        );
    }

    #[test]
    fn test_read_columns_matched_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "age,address,name,id\n12.25,Y,Carol,3\n").unwrap();

        let people = CsvFormat.read(&path).unwrap();
        assert_eq!(people, vec![Person::new(3, "Carol", "Y", 12.25)]);
    }

    #[test]
    fn test_write_emits_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let people = vec![Person::new(1, "Alice", "1 Main St", 30.5)];

        CsvFormat.write(&people, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "id,name,address,age\n1,Alice,1 Main St,30.5\n");
    }

    #[test]
    fn test_write_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let people = vec![Person::new(4, "Dan", "5 Elm St, Apt 2", 51.0)];

        CsvFormat.write(&people, &path).unwrap();

        assert_eq!(CsvFormat.read(&path).unwrap(), people);
    }

    #[test]
    fn test_missing_age_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,name,address\n1,Alice,1 Main St\n").unwrap();

        let err = CsvFormat.read(&path).unwrap_err();
        assert!(matches!(err, BenchError::Decode { format: Format::Csv, .. }));
    }

    #[test]
    fn test_non_numeric_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,name,address,age\nabc,Alice,1 Main St,30\n").unwrap();

        assert!(CsvFormat.read(&path).is_err());
    }
}
