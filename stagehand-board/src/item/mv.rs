//! MoveItem command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::{resolve_move, Resolution, UnchangedReason};
use crate::types::{Bucket, ItemRef};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};
use tracing::{trace, warn};

/// What happened to a move request
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MoveReport {
    Moved { version: u64, change: Change },
    Unchanged(UnchangedReason),
}

impl MoveReport {
    pub(crate) fn into_outcome(self) -> Result<Outcome> {
        match self {
            Self::Moved { version, change } => {
                let mut result = serde_json::to_value(&change)?;
                result["changed"] = json!(true);
                result["version"] = json!(version);
                Ok(Outcome::Changed(result))
            }
            Self::Unchanged(reason) => Ok(Outcome::Unchanged(unchanged(reason))),
        }
    }
}

/// Resolve a move against the current snapshot and commit it if anything
/// changed
pub(crate) fn commit_move(ctx: &mut BoardContext, item: &ItemRef, target: &Bucket) -> MoveReport {
    match resolve_move(ctx.state(), item, target) {
        Resolution::Moved { next, change } => {
            let version = ctx.commit(next, change.clone());
            MoveReport::Moved { version, change }
        }
        Resolution::Unchanged(reason) => {
            match reason {
                UnchangedReason::StaleItem => {
                    warn!(%item, %target, "move of an item that no longer exists")
                }
                _ => trace!(%item, %target, %reason, "move left state unchanged"),
            }
            MoveReport::Unchanged(reason)
        }
    }
}

/// Move any item onto a bucket
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveItem {
    /// The dragged item
    pub item: ItemRef,
    /// Where it was dropped
    pub target: Bucket,
}

operation!(
    MoveItem,
    verb = "move",
    noun = "item",
    description = "Move a task to a column or a post to a day"
);

impl MoveItem {
    pub fn new(item: impl Into<ItemRef>, target: Bucket) -> Self {
        Self {
            item: item.into(),
            target,
        }
    }

    pub(crate) fn report(&self, ctx: &mut BoardContext) -> MoveReport {
        commit_move(ctx, &self.item, &self.target)
    }
}

impl Execute<BoardContext, BoardError> for MoveItem {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.report(ctx).into_outcome();
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, PostId, TaskId};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
    }

    #[test]
    fn test_move_task_item() {
        let mut ctx = BoardContext::seeded(today());

        let result = MoveItem::new(TaskId::from("task-1"), Bucket::column("done"))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["change"], "task_moved");
        assert_eq!(result["from"], "todo");
        assert_eq!(result["to"], "done");
        assert_eq!(result["version"], 1);
        assert_eq!(
            ctx.state().board.locate(&"task-1".into()),
            Some(&ColumnId::from("done"))
        );
    }

    #[test]
    fn test_move_post_item() {
        let mut ctx = BoardContext::seeded(today());
        let target = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let result = MoveItem::new(PostId(1), Bucket::day(target))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["from"], "2024-01-09");
        assert_eq!(result["to"], "2024-01-15");
        assert_eq!(ctx.state().schedule.get(PostId(1)).unwrap().day(), target);
    }

    #[test]
    fn test_move_into_same_bucket_is_not_logged() {
        let mut ctx = BoardContext::seeded(today());
        let before = ctx.snapshot();

        let result =
            MoveItem::new(TaskId::from("task-6"), Bucket::column("done")).execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap()["reason"], "already_in_bucket");
        assert_eq!(*ctx.snapshot(), *before);
        assert_eq!(ctx.version(), 0);
    }
}
