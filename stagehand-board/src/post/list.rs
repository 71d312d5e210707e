//! ListDay and ListWeek commands

use crate::calendar::{self, DEFAULT_WINDOW_DAYS};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::read;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// List the posts scheduled on one day
#[derive(Debug, Deserialize, Serialize)]
pub struct ListDay {
    pub day: NaiveDate,
}

operation!(
    ListDay,
    verb = "list",
    noun = "day",
    description = "List the posts scheduled on one day"
);

impl ListDay {
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }

    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        let posts = ctx.state().schedule.on_day(self.day);
        Ok(json!({
            "day": self.day,
            "count": posts.len(),
            "posts": serde_json::to_value(posts)?,
        }))
    }
}

impl Execute<BoardContext, BoardError> for ListDay {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}

/// List the calendar window starting at `today`, one bucket per day
#[derive(Debug, Deserialize, Serialize)]
pub struct ListWeek {
    pub today: NaiveDate,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

operation!(
    ListWeek,
    verb = "list",
    noun = "week",
    description = "List the calendar window, one bucket per day"
);

impl ListWeek {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        if self.days == 0 {
            return Err(BoardError::invalid_value("days", "window must cover at least one day"));
        }
        let buckets = calendar::week(ctx.state(), self.today, self.days);
        Ok(json!({
            "today": self.today,
            "days": serde_json::to_value(buckets)?,
        }))
    }
}

impl Execute<BoardContext, BoardError> for ListWeek {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_list_day() {
        let mut ctx = BoardContext::seeded(date(8));

        let result = ListDay::new(date(11)).execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["count"], 1);
        assert_eq!(result["posts"][0]["title"], "#StagehandChallenge");
    }

    #[test]
    fn test_list_empty_day() {
        let mut ctx = BoardContext::seeded(date(8));

        let result = ListDay::new(date(8)).execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["count"], 0);
    }

    #[test]
    fn test_list_week() {
        let mut ctx = BoardContext::seeded(date(8));

        let result = ListWeek::new(date(8)).execute(&mut ctx).into_result().unwrap();

        let days = result["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["date"], "2024-01-08");
        assert_eq!(days[0]["is_today"], true);
        assert_eq!(days[5]["posts"][0]["id"], 4);
    }

    #[test]
    fn test_list_week_rejects_empty_window() {
        let mut ctx = BoardContext::new();

        let result = ListWeek::new(date(8)).with_days(0).execute(&mut ctx);

        assert!(result.into_result().unwrap_err().is_validation());
    }
}
