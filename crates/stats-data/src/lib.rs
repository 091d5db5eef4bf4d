//! Ingestion and reporting layer for the task statistics tool.
//!
//! Reads task records from a line stream, sorts them into valid and invalid
//! buckets keyed by task id, and renders the summary report.

pub mod aggregator;
pub mod reader;
pub mod report;

pub use stats_core as core;
