//! Line parsing and stream ingestion for task records.
//!
//! Input is a header line followed by comma-separated data lines in the
//! column order documented on [`TaskRecord`]. Malformed lines are reported
//! to a diagnostics sink and skipped; only a failing stream aborts ingestion.

use std::io::{BufRead, Write};

use stats_core::error::{MalformedLine, Result, StatsError};
use stats_core::models::{TaskRecord, FIELD_COUNT};
use tracing::debug;

use crate::aggregator::TaskLedger;

// ── Public API ────────────────────────────────────────────────────────────────

/// Line counts gathered while ingesting a stream. The header is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines_read: usize,
    pub lines_rejected: usize,
}

/// Split one data line into a [`TaskRecord`].
///
/// `line` must already be stripped of its line terminator. Checks run in
/// column-count, `total_size`, `spent_time` order and the first failure wins.
pub fn parse_line(line: &str) -> std::result::Result<TaskRecord, MalformedLine> {
    let fields: Vec<&str> = line.split(',').collect();

    let [
        task_id,
        state,
        creation_time,
        updated_time,
        spent_time,
        total_size,
        valid_image,
        product_id,
        error_msg,
        last_phase,
    ] = fields.as_slice()
    else {
        return Err(if fields.len() < FIELD_COUNT {
            MalformedLine::NotEnoughFields { got: fields.len() }
        } else {
            MalformedLine::TooManyFields
        });
    };

    let total_size = parse_total_size(total_size)?;
    let spent_time = parse_spent_time(spent_time)?;

    Ok(TaskRecord {
        task_id: task_id.to_string(),
        state: state.to_string(),
        creation_time: creation_time.to_string(),
        updated_time: updated_time.to_string(),
        spent_time,
        total_size,
        valid_image: valid_image.to_string(),
        product_id: product_id.to_string(),
        error_msg: error_msg.to_string(),
        last_phase: last_phase.to_string(),
    })
}

/// Read a header plus data lines from `reader` into a [`TaskLedger`].
///
/// The header is discarded whatever it contains; an empty stream is treated
/// as a header with no data. Each malformed line writes one diagnostic line
/// to `diagnostics`, in input order.
///
/// # Errors
///
/// [`StatsError::Read`] when the stream cannot be read (including invalid
/// UTF-8), [`StatsError::Write`] when a diagnostic cannot be written.
pub fn ingest<R: BufRead, W: Write>(
    reader: R,
    diagnostics: &mut W,
) -> Result<(TaskLedger, IngestStats)> {
    let mut ledger = TaskLedger::new();
    let mut stats = IngestStats::default();

    // Line numbers are 1-based and include the header.
    let mut lines = reader.lines().enumerate().map(|(index, line)| {
        line.map_err(|source| StatsError::Read {
            line: index + 1,
            source,
        })
    });

    match lines.next() {
        Some(header) => {
            let header = header?;
            debug!("Discarding header: {:?}", header);
        }
        None => {
            debug!("Input stream is empty");
            return Ok((ledger, stats));
        }
    }

    for line in lines {
        let line = line?;
        stats.lines_read += 1;

        match parse_line(&line) {
            Ok(record) => {
                ledger.record(record);
            }
            Err(reason) => {
                stats.lines_rejected += 1;
                debug!("Skipping data line {}: {}", stats.lines_read, reason);
                writeln!(diagnostics, "{}", reason)?;
            }
        }
    }

    debug!(
        "Ingested {} data lines: {} valid, {} invalid, {} rejected",
        stats.lines_read,
        ledger.valid_count(),
        ledger.invalid_count(),
        stats.lines_rejected,
    );

    Ok((ledger, stats))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn parse_total_size(raw: &str) -> std::result::Result<i64, MalformedLine> {
    raw.trim()
        .parse()
        .map_err(|_| MalformedLine::InvalidTotalSize(raw.to_string()))
}

fn parse_spent_time(raw: &str) -> std::result::Result<f64, MalformedLine> {
    raw.trim()
        .parse()
        .map_err(|_| MalformedLine::InvalidSpentTime(raw.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
