//! SetFanRequestStatus command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, unchanged, Outcome};
use crate::resolve::UnchangedReason;
use crate::types::{RequestId, RequestStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Move a fan request through Pending / In progress / Completed
#[derive(Debug, Deserialize, Serialize)]
pub struct SetFanRequestStatus {
    pub id: RequestId,
    pub status: RequestStatus,
}

operation!(
    SetFanRequestStatus,
    verb = "update",
    noun = "request",
    description = "Change the status of a fan request"
);

impl SetFanRequestStatus {
    pub fn new(id: impl Into<RequestId>, status: RequestStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let Some(current) = ctx.state().requests.get(self.id) else {
            return Ok(Outcome::Unchanged(unchanged(UnchangedReason::StaleItem)));
        };
        if current.status == self.status {
            return Ok(Outcome::Unchanged(unchanged("status_unchanged")));
        }

        let mut next = ctx.state().clone();
        next.requests.set_status(self.id, self.status);
        let result = serde_json::to_value(next.requests.get(self.id))?;
        ctx.commit(next, Change::RequestUpdated { id: self.id });

        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for SetFanRequestStatus {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
