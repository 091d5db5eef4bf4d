//! The three-line summary printed after ingestion.

use std::io::Write;

use stats_core::error::Result;
use stats_core::formatting::{bytes_to_gib, format_float};

use crate::aggregator::TaskLedger;

/// Figures shown in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub valid_tasks: usize,
    pub invalid_tasks: usize,
    /// Total size of all valid tasks in GiB.
    pub total_size_gib: f64,
}

impl Summary {
    pub fn from_ledger(ledger: &TaskLedger) -> Self {
        Self {
            valid_tasks: ledger.valid_count(),
            invalid_tasks: ledger.invalid_count(),
            total_size_gib: bytes_to_gib(ledger.total_valid_size()),
        }
    }

    /// Write the report, one figure per line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "valid tasks: {}", self.valid_tasks)?;
        writeln!(out, "invalid tasks: {}", self.invalid_tasks)?;
        writeln!(
            out,
            "total_size valid (GB): {}",
            format_float(self.total_size_gib)
        )?;
        Ok(())
    }
}
