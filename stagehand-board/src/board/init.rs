//! InitBoard command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, Outcome};
use crate::types::{Board, Column};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};
use std::collections::HashSet;

/// Replace the board's columns with a fresh, empty set
#[derive(Debug, Deserialize, Serialize)]
pub struct InitBoard {
    /// Columns in display order
    pub columns: Vec<Column>,
}

operation!(
    InitBoard,
    verb = "init",
    noun = "board",
    description = "Reset the board to an empty set of columns"
);

impl InitBoard {
    /// Initialize with the default To Do / Doing / Done columns
    pub fn new() -> Self {
        Self {
            columns: Board::default_columns(),
        }
    }

    /// Initialize with custom columns
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let tasks = ctx.state().board.tasks.len();
        if tasks > 0 {
            return Err(BoardError::BoardNotEmpty { count: tasks });
        }
        if self.columns.is_empty() {
            return Err(BoardError::missing_field("columns"));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            require_text("column id", column.id.as_str())?;
            require_text("column title", &column.title)?;
            if !seen.insert(&column.id) {
                return Err(BoardError::duplicate_id("column", column.id.to_string()));
            }
        }

        // Incoming columns start empty whatever they carried
        let columns: Vec<Column> = self
            .columns
            .iter()
            .map(|c| Column::new(c.id.clone(), c.title.clone()))
            .collect();

        let mut next = ctx.state().clone();
        next.board = Board::new(columns);
        let count = next.board.columns.len();
        let result = serde_json::to_value(&next.board.columns)?;
        ctx.commit(next, Change::BoardInitialized { columns: count });

        Ok(Outcome::Changed(serde_json::json!({ "columns": result })))
    }
}

impl Default for InitBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Execute<BoardContext, BoardError> for InitBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
