//! Core types shared across the crate: the `Person` record and per-format
//! timing results.

pub mod person;
pub mod timing;

pub use person::Person;
pub use timing::FormatTiming;
