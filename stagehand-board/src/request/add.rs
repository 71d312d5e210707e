//! AddFanRequest command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, Outcome};
use crate::types::{FanRequest, Platform, RequestStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Log something a fan asked for
#[derive(Debug, Deserialize, Serialize)]
pub struct AddFanRequest {
    pub request: String,
    pub fan_name: String,
    pub platform: Platform,
    pub date: NaiveDate,
}

operation!(AddFanRequest, verb = "add", noun = "request", description = "Log a new fan request");

impl AddFanRequest {
    pub fn new(
        request: impl Into<String>,
        fan_name: impl Into<String>,
        platform: Platform,
        date: NaiveDate,
    ) -> Self {
        Self {
            request: request.into(),
            fan_name: fan_name.into(),
            platform,
            date,
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("request", &self.request)?;
        require_text("fan_name", &self.fan_name)?;

        let request = FanRequest {
            id: ctx.allocate_request_id(),
            request: self.request.trim().to_string(),
            fan_name: self.fan_name.trim().to_string(),
            platform: self.platform,
            status: RequestStatus::Pending,
            date: self.date,
        };
        let id = request.id;
        let result = serde_json::to_value(&request)?;

        let mut next = ctx.state().clone();
        next.requests.push(request);
        ctx.commit(next, Change::RequestAdded { id });

        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for AddFanRequest {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fan_request() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        let result = AddFanRequest::new(
            "Live session of the new single",
            "Dani R.",
            Platform::YouTube,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        )
        .execute(&mut ctx)
        .into_result()
        .unwrap();

        assert_eq!(result["id"], 4);
        assert_eq!(result["status"], "pending");
        assert_eq!(ctx.state().requests.len(), 4);
    }

    #[test]
    fn test_add_fan_request_requires_fan_name() {
        let mut ctx = BoardContext::new();

        let err = AddFanRequest::new(
            "Remix",
            "",
            Platform::TikTok,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        )
        .execute(&mut ctx)
        .into_result()
        .unwrap_err();

        assert!(matches!(err, BoardError::MissingField { ref field } if field == "fan_name"));
    }
}
