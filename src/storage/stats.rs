//! Summary CSV with one row per format.

use std::io::Write;
use std::path::Path;

use crate::BenchError;
use crate::core::FormatTiming;

/// Header line of the stats file, written verbatim.
pub const STATS_HEADER: &str = "Format, Read (ms), Write (ms)";

#[derive(Debug, Clone, Default)]
pub struct StatsExporter;

impl StatsExporter {
    pub fn new() -> Self {
        StatsExporter
    }

    /// Write `timings` to `output`, replacing any previous file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn export(&self, timings: &[FormatTiming], output: &Path) -> Result<(), BenchError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
            }
        }

        let file = std::fs::File::create(output).map_err(|e| BenchError::io(output, e))?;

        self.export_to_writer(timings, file)
    }

    /// Write `timings` to any writer.
    pub fn export_to_writer<W: Write>(&self, timings: &[FormatTiming], mut writer: W) -> Result<(), BenchError> {
        // The header carries spaces after the commas, so it bypasses the csv writer.
        writeln!(writer, "{STATS_HEADER}")
            .map_err(|e| BenchError::Message(format!("failed to write stats header: {e}")))?;

        let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        for timing in timings {
            csv_writer
                .write_record(&self.timing_to_row(timing))
                .map_err(|e| BenchError::Message(format!("failed to write stats row: {e}")))?;
        }

        csv_writer
            .flush()
            .map_err(|e| BenchError::Message(format!("failed to flush stats writer: {e}")))?;

        Ok(())
    }

    fn timing_to_row(&self, timing: &FormatTiming) -> [String; 3] {
        [
            timing.format.extension().to_string(),
            format!("{:.3}", timing.read_ms),
            format!("{:.3}", timing.write_ms),
        ]
    }
}
