//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::{ItemRef, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Delete a task and purge it from every column
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task and purge it from every column"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let item = ItemRef::Task(self.id.clone());
        if !ctx.state().contains(&item) {
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        }

        let mut next = ctx.state().clone();
        next.delete_item(&item);
        ctx.commit(next, Change::TaskDeleted { id: self.id.clone() });

        Ok(Outcome::Changed(json!({ "deleted": true, "id": self.id })))
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
