//! DeleteItem command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::ItemRef;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Delete a task or a post
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteItem {
    pub item: ItemRef,
}

operation!(DeleteItem, verb = "delete", noun = "item", description = "Delete a task or a post");

impl DeleteItem {
    pub fn new(item: impl Into<ItemRef>) -> Self {
        Self { item: item.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let mut next = ctx.state().clone();
        if !next.delete_item(&self.item) {
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        }

        let change = match &self.item {
            ItemRef::Task(id) => Change::TaskDeleted { id: id.clone() },
            ItemRef::Post(id) => Change::PostDeleted { id: *id },
        };
        ctx.commit(next, change);

        Ok(Outcome::Changed(json!({ "deleted": true, "item": self.item.to_string() })))
    }
}

impl Execute<BoardContext, BoardError> for DeleteItem {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
