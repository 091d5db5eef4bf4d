/// Number of comma-separated fields in every data line.
pub const FIELD_COUNT: usize = 10;

/// The exact `valid_image` value that routes a record to the valid bucket.
pub const VALID_IMAGE_FLAG: &str = "True";

/// One parsed data line, before it is sorted into a bucket.
///
/// Column order on the wire: `task_id, state, creation_time, updated_time,
/// spent_time, total_size, valid_image, product_id, error_msg, last_phase`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub task_id: String,
    pub state: String,
    pub creation_time: String,
    pub updated_time: String,
    /// Seconds spent processing the task.
    pub spent_time: f64,
    /// Accumulated output size in bytes.
    pub total_size: i64,
    pub valid_image: String,
    pub product_id: String,
    pub error_msg: String,
    /// Last pipeline stage the task reached.
    pub last_phase: String,
}

impl TaskRecord {
    /// Whether source imagery exists for this task.
    ///
    /// Only the literal `"True"` counts; `"true"`, `"1"` or an empty field
    /// all mean the task is invalid.
    pub fn is_valid_image(&self) -> bool {
        self.valid_image == VALID_IMAGE_FLAG
    }
}

/// A task that had source imagery.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTaskRecord {
    pub state: String,
    pub total_size: i64,
    pub last_phase: String,
    pub spent_time: f64,
}

impl From<TaskRecord> for ValidTaskRecord {
    fn from(record: TaskRecord) -> Self {
        Self {
            state: record.state,
            total_size: record.total_size,
            last_phase: record.last_phase,
            spent_time: record.spent_time,
        }
    }
}

/// A task without source imagery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTaskRecord {
    pub state: String,
    pub last_phase: String,
}

impl From<TaskRecord> for InvalidTaskRecord {
    fn from(record: TaskRecord) -> Self {
        Self {
            state: record.state,
            last_phase: record.last_phase,
        }
    }
}
