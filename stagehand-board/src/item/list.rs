//! ListBucket command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::read;
use crate::types::{Bucket, BucketItems};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// List the items of a column or a day in display order
#[derive(Debug, Deserialize, Serialize)]
pub struct ListBucket {
    pub bucket: Bucket,
}

operation!(
    ListBucket,
    verb = "list",
    noun = "bucket",
    description = "List the items of a column or a day in display order"
);

impl ListBucket {
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }

    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        let items = ctx.state().list_bucket(&self.bucket);
        let count = items.len();
        let items = match items {
            BucketItems::Tasks(tasks) => serde_json::to_value(tasks)?,
            BucketItems::Posts(posts) => serde_json::to_value(posts)?,
        };

        Ok(json!({
            "bucket": self.bucket.to_string(),
            "count": count,
            "items": items,
        }))
    }
}

impl Execute<BoardContext, BoardError> for ListBucket {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}
