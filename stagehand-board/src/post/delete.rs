//! DeletePost command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::PostId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Remove a post from the schedule
#[derive(Debug, Deserialize, Serialize)]
pub struct DeletePost {
    pub id: PostId,
}

operation!(
    DeletePost,
    verb = "delete",
    noun = "post",
    description = "Remove a post from the schedule"
);

impl DeletePost {
    pub fn new(id: impl Into<PostId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let mut next = ctx.state().clone();
        if next.schedule.remove(self.id).is_none() {
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        }
        ctx.commit(next, Change::PostDeleted { id: self.id });

        Ok(Outcome::Changed(json!({ "deleted": true, "id": self.id })))
    }
}

impl Execute<BoardContext, BoardError> for DeletePost {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_delete_post() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        let result = DeletePost::new(2u64).execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["id"], 2);
        assert_eq!(ctx.state().schedule.len(), 3);
        assert!(ctx.state().schedule.is_sorted());
    }

    #[test]
    fn test_delete_post_is_idempotent() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        DeletePost::new(2u64).execute(&mut ctx).into_result().unwrap();
        let again = DeletePost::new(2u64).execute(&mut ctx);

        assert!(!again.changed_state());
        assert_eq!(ctx.version(), 1);
    }
}
