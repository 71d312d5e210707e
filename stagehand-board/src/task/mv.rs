//! MoveTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::item::commit_move;
use crate::outcome::finish;
use crate::types::{Bucket, ColumnId, ItemRef, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Move a task to the end of another column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The destination column
    pub column: ColumnId,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to the end of another column"
);

impl MoveTask {
    /// Create a MoveTask command to move to a column (at the end)
    pub fn to_column(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let item = ItemRef::Task(self.id.clone());
        let target = Bucket::Column(self.column.clone());
        let result = commit_move(ctx, &item, &target).into_outcome();
        finish(self, start, result)
    }
}
