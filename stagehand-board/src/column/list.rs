//! ListColumns command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::read;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stagehand_operations::{operation, Execute, ExecutionResult};

/// List all columns in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns;

operation!(
    ListColumns,
    verb = "list",
    noun = "columns",
    description = "List all columns in display order"
);

impl ListColumns {
    fn run(&self, ctx: &BoardContext) -> Result<Value> {
        let columns: Vec<Value> = ctx
            .state()
            .board
            .columns
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "title": c.title,
                    "task_count": c.task_ids.len(),
                })
            })
            .collect();

        Ok(json!({
            "count": columns.len(),
            "columns": columns,
        }))
    }
}

impl Execute<BoardContext, BoardError> for ListColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(self.run(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_list_columns() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        let result = ListColumns.execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["count"], 3);
        assert_eq!(result["columns"][0]["id"], "todo");
        assert_eq!(result["columns"][0]["task_count"], 3);
        assert_eq!(result["columns"][2]["task_count"], 1);
    }
}
