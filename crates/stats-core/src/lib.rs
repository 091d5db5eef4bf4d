//! Core domain types for the task statistics tool.
//!
//! Holds the task record models, the error types shared across the
//! workspace, and the number formatting used by the report.

pub mod error;
pub mod formatting;
pub mod models;
