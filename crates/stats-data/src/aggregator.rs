//! Keyed buckets of valid and invalid tasks.

use std::collections::HashMap;

use stats_core::models::{InvalidTaskRecord, TaskRecord, ValidTaskRecord};
use tracing::debug;

// ── Bucket ────────────────────────────────────────────────────────────────────

/// Which bucket a record landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Valid,
    Invalid,
}

// ── TaskLedger ────────────────────────────────────────────────────────────────

/// Valid and invalid tasks, each keyed by task id.
///
/// A record's bucket is fixed by its `valid_image` flag when it is recorded.
/// Recording the same task id twice in one bucket keeps the later record.
#[derive(Debug, Default)]
pub struct TaskLedger {
    valid: HashMap<String, ValidTaskRecord>,
    invalid: HashMap<String, InvalidTaskRecord>,
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` into its bucket, overwriting any earlier record with
    /// the same task id in that bucket.
    pub fn record(&mut self, record: TaskRecord) -> Bucket {
        let task_id = record.task_id.clone();

        let (bucket, replaced) = if record.is_valid_image() {
            let previous = self.valid.insert(record.task_id.clone(), record.into());
            (Bucket::Valid, previous.is_some())
        } else {
            let previous = self.invalid.insert(record.task_id.clone(), record.into());
            (Bucket::Invalid, previous.is_some())
        };

        if replaced {
            debug!("Task {} seen again; keeping the later {:?} record", task_id, bucket);
        }
        bucket
    }

    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    pub fn valid_task(&self, task_id: &str) -> Option<&ValidTaskRecord> {
        self.valid.get(task_id)
    }

    pub fn invalid_task(&self, task_id: &str) -> Option<&InvalidTaskRecord> {
        self.invalid.get(task_id)
    }

    /// Exact sum of `total_size` in bytes over all valid tasks.
    pub fn total_valid_size(&self) -> i128 {
        self.valid
            .values()
            .map(|task| i128::from(task.total_size))
            .sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(task_id: &str, total_size: i64, valid_image: &str) -> TaskRecord {
        TaskRecord {
            task_id: task_id.to_string(),
            state: "archived".to_string(),
            creation_time: "2019-05-01".to_string(),
            updated_time: "2019-05-02".to_string(),
            spent_time: 1.5,
            total_size,
            valid_image: valid_image.to_string(),
            product_id: "p1".to_string(),
            error_msg: String::new(),
            last_phase: "archiving".to_string(),
        }
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = TaskLedger::new();
        assert_eq!(ledger.valid_count(), 0);
        assert_eq!(ledger.invalid_count(), 0);
        assert_eq!(ledger.total_valid_size(), 0);
    }

    #[test]
    fn test_record_routes_by_flag() {
        let mut ledger = TaskLedger::new();
        assert_eq!(ledger.record(make_record("t1", 10, "True")), Bucket::Valid);
        assert_eq!(ledger.record(make_record("t2", 10, "False")), Bucket::Invalid);
        assert_eq!(ledger.record(make_record("t3", 10, "true")), Bucket::Invalid);
        assert_eq!(ledger.record(make_record("t4", 10, "")), Bucket::Invalid);

        assert_eq!(ledger.valid_count(), 1);
        assert_eq!(ledger.invalid_count(), 3);
        assert!(ledger.valid_task("t1").is_some());
        assert!(ledger.valid_task("t2").is_none());
        assert!(ledger.invalid_task("t3").is_some());
    }

    #[test]
    fn test_duplicate_task_id_keeps_last_record() {
        let mut ledger = TaskLedger::new();
        ledger.record(make_record("t1", 100, "True"));
        ledger.record(make_record("t1", 250, "True"));

        assert_eq!(ledger.valid_count(), 1);
        assert_eq!(ledger.valid_task("t1").unwrap().total_size, 250);
        assert_eq!(ledger.total_valid_size(), 250);
    }

    #[test]
    fn test_same_task_id_may_appear_in_both_buckets() {
        let mut ledger = TaskLedger::new();
        ledger.record(make_record("t1", 100, "True"));
        ledger.record(make_record("t1", 100, "False"));

        assert_eq!(ledger.valid_count(), 1);
        assert_eq!(ledger.invalid_count(), 1);
    }

    #[test]
    fn test_total_valid_size_ignores_invalid_tasks() {
        let mut ledger = TaskLedger::new();
        ledger.record(make_record("t1", 1_000, "True"));
        ledger.record(make_record("t2", 2_000, "True"));
        ledger.record(make_record("t3", 999_999, "False"));

        assert_eq!(ledger.total_valid_size(), 3_000);
    }

    #[test]
    fn test_total_valid_size_does_not_overflow_i64() {
        let mut ledger = TaskLedger::new();
        ledger.record(make_record("t1", i64::MAX, "True"));
        ledger.record(make_record("t2", i64::MAX, "True"));

        assert_eq!(ledger.total_valid_size(), i128::from(i64::MAX) * 2);
    }
}
