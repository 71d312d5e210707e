//! ListFanRequests command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::read;
use crate::types::RequestStatus;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// List fan requests, newest first
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListFanRequests {
    /// Only requests in this state
    pub status: Option<RequestStatus>,
}

operation!(
    ListFanRequests,
    verb = "list",
    noun = "requests",
    description = "List fan requests, newest first"
);

impl ListFanRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        let log = &ctx.state().requests;
        let requests = match self.status {
            Some(status) => log.with_status(status),
            None => log.newest_first(),
        };

        Ok(json!({
            "count": requests.len(),
            "requests": serde_json::to_value(requests)?,
        }))
    }
}

impl Execute<BoardContext, BoardError> for ListFanRequests {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}
