//! Change notifications published on every commit

use crate::types::{ColumnId, PostId, RequestId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a commit changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    BoardInitialized { columns: usize },
    ColumnAdded { id: ColumnId },
    TaskAdded { id: TaskId, column: ColumnId },
    TaskUpdated { id: TaskId },
    TaskDeleted { id: TaskId },
    TaskMoved { id: TaskId, from: ColumnId, to: ColumnId },
    PostAdded { id: PostId },
    PostUpdated { id: PostId },
    PostDeleted { id: PostId },
    PostMoved { id: PostId, from: NaiveDate, to: NaiveDate },
    RequestAdded { id: RequestId },
    RequestUpdated { id: RequestId },
}

/// Sent to subscribers after the snapshot at `version` became current
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEvent {
    pub version: u64,
    #[serde(flatten)]
    pub change: Change,
}
