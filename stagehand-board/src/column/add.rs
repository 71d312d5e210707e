//! AddColumn command

use crate::context::BoardContext;
use crate::error::{require_text, BoardError, Result};
use crate::event::Change;
use crate::outcome::{finish, Outcome};
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagehand_operations::{operation, Execute, ExecutionResult};

/// Add a new column to the board
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column ID (slug)
    pub id: ColumnId,
    /// The column display title
    pub title: String,
    /// Optional position in column order; appended when absent
    pub order: Option<usize>,
}

operation!(AddColumn, verb = "add", noun = "column", description = "Add a new column to the board");

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order: None,
        }
    }

    /// Set the order (position in column list)
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        require_text("id", self.id.as_str())?;
        require_text("title", &self.title)?;
        if ctx.state().board.column(&self.id).is_some() {
            return Err(BoardError::duplicate_id("column", self.id.to_string()));
        }

        let mut next = ctx.state().clone();
        let column = Column::new(self.id.clone(), self.title.trim());
        let at = self
            .order
            .unwrap_or(next.board.columns.len())
            .min(next.board.columns.len());
        next.board.columns.insert(at, column.clone());

        ctx.commit(next, Change::ColumnAdded { id: column.id.clone() });

        let mut result = serde_json::to_value(&column)?;
        result["order"] = serde_json::json!(at);
        Ok(Outcome::Changed(result))
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
