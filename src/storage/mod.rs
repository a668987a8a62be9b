//! Persistence for benchmark results.
//!
//! `stats` writes the summary CSV every run produces; `report` writes the
//! optional JSON run report.

pub mod report;
pub mod stats;

pub use report::{FormatReport, RunReport, write_json};
pub use stats::{STATS_HEADER, StatsExporter};
