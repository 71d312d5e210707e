//! Task cards

use super::ids::TaskId;
use serde::{Deserialize, Serialize};

/// A card on the task board. Which column it sits in is recorded by the
/// column, not the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    /// Create a task with a fresh id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
        }
    }

    /// Create a task with a known id (seed data, tests)
    pub fn with_id(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
