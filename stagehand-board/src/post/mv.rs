//! MovePost command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::item::commit_move;
use crate::outcome::finish;
use crate::types::{Bucket, ItemRef, PostId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Reschedule a post onto another day, keeping its time of day
#[derive(Debug, Deserialize, Serialize)]
pub struct MovePost {
    pub id: PostId,
    pub day: NaiveDate,
}

operation!(
    MovePost,
    verb = "move",
    noun = "post",
    description = "Reschedule a post onto another day, keeping its time of day"
);

impl MovePost {
    pub fn to_day(id: impl Into<PostId>, day: NaiveDate) -> Self {
        Self { id: id.into(), day }
    }
}

impl Execute<BoardContext, BoardError> for MovePost {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result =
            commit_move(ctx, &ItemRef::Post(self.id), &Bucket::Day(self.day)).into_outcome();
        finish(self, start, result)
    }
}
