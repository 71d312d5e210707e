//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::{Item, Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};
use tracing::warn;

/// Replace a task's content in place
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New content
    pub content: String,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Replace a task's content in place"
);

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("content", &self.content)?;

        if ctx.state().board.task(&self.id).is_none() {
            warn!(task = %self.id, "update of a task that no longer exists");
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        }

        let task = Task::with_id(self.id.clone(), self.content.trim());
        let mut next = ctx.state().clone();
        // Replacing keeps the task's column and position
        next.upsert_item(Item::Task(task.clone()));
        ctx.commit(next, Change::TaskUpdated { id: self.id.clone() });

        Ok(Outcome::Changed(serde_json::to_value(&task)?))
    }
}

impl Execute<BoardContext, BoardError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnId;
    use chrono::NaiveDate;

    fn seeded() -> BoardContext {
        BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
    }

    #[test]
    fn test_update_task_keeps_position() {
        let mut ctx = seeded();

        let result = UpdateTask::new("task-4", "Approve the cover art")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["content"], "Approve the cover art");
        let doing = ctx.state().board.column(&ColumnId::from("doing")).unwrap();
        assert_eq!(doing.task_ids[0], "task-4");
        let task = ctx.state().board.task(&"task-4".into()).unwrap();
        assert_eq!(task.content, "Approve the cover art");
    }

    #[test]
    fn test_update_task_blank_rejected() {
        let mut ctx = seeded();
        let before = ctx.snapshot();

        let err = UpdateTask::new("task-4", "").execute(&mut ctx).into_result().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(*ctx.snapshot(), *before);
    }

    #[test]
    fn test_update_missing_task_is_noop() {
        let mut ctx = seeded();

        let result = UpdateTask::new("task-99", "Anything")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["changed"], false);
        assert_eq!(result["reason"], "stale_item");
        assert_eq!(ctx.version(), 0);
    }
}
