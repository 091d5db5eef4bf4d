use thiserror::Error;

use crate::models::FIELD_COUNT;

/// Why a single data line was rejected.
///
/// Rejected lines are reported and skipped; they never abort a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedLine {
    /// The line split into fewer than ten fields.
    #[error("not enough values to unpack (expected {expected}, got {got})", expected = FIELD_COUNT)]
    NotEnoughFields { got: usize },

    /// The line split into more than ten fields.
    #[error("too many values to unpack (expected {expected})", expected = FIELD_COUNT)]
    TooManyFields,

    /// `total_size` is not an integer.
    #[error("invalid literal for int() with base 10: '{0}'")]
    InvalidTotalSize(String),

    /// `spent_time` is not a floating-point number.
    #[error("could not convert string to float: '{0}'")]
    InvalidSpentTime(String),
}

/// Fatal errors that end a run.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The input stream could not be read.
    #[error("Failed to read input at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;
