//! GetColumn command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::read;
use crate::types::{Bucket, BucketItems, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Get a column and its tasks in order
#[derive(Debug, Deserialize, Serialize)]
pub struct GetColumn {
    /// The column ID to retrieve
    pub id: ColumnId,
}

operation!(
    GetColumn,
    verb = "get",
    noun = "column",
    description = "Get a column and its tasks in order"
);

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }

    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        let state = ctx.state();
        let title = state.board.column(&self.id).map(|c| c.title.clone());
        let tasks = match state.list_bucket(&Bucket::Column(self.id.clone())) {
            BucketItems::Tasks(tasks) => tasks,
            BucketItems::Posts(_) => Vec::new(),
        };

        Ok(json!({
            "id": self.id,
            "title": title,
            "count": tasks.len(),
            "tasks": serde_json::to_value(tasks)?,
        }))
    }
}

impl Execute<BoardContext, BoardError> for GetColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}
