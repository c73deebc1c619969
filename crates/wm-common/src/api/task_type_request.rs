use serde::{Deserialize, Serialize};

/// Body for catalog and per-worker task-type additions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTypeRequest {
    pub task_type: String,
}
