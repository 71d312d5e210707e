//! AddTask command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, Outcome};
use crate::types::{Bucket, ColumnId, Item, Task};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Add a new task to the end of a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// What needs doing
    pub content: String,
    /// Target column; the first column when absent
    pub column: Option<ColumnId>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Add a new task to the end of a column"
);

impl AddTask {
    /// Create a new AddTask command
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            column: None,
        }
    }

    /// Put the task in a specific column
    pub fn in_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("content", &self.content)?;

        let task = Task::new(self.content.trim());
        let id = task.id.clone();
        let mut next = ctx.state().clone();
        let column = match &self.column {
            Some(column) => {
                next.board.upsert_task(task.clone(), Some(column))?;
                column.clone()
            }
            None => match next.upsert_item(Item::Task(task.clone())) {
                Some(Bucket::Column(column)) => column,
                _ => return Err(BoardError::missing_field("column")),
            },
        };
        ctx.commit(
            next,
            Change::TaskAdded {
                id,
                column: column.clone(),
            },
        );

        let mut result = serde_json::to_value(&task)?;
        result["column"] = serde_json::json!(column);
        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
