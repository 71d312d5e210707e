//! The task board: columns with explicit membership sequences plus the task map

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A workflow stage. `task_ids` is the column's manual order; it is the only
/// record of which column a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Check whether the column holds `id`
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }
}

/// Result of [`Board::move_task`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMove {
    /// The task left `from` and was appended to the target
    Moved { from: ColumnId },
    /// The task is already in the target column
    AlreadyThere,
    /// No column holds the task
    NotOnBoard,
    /// The target column does not exist
    UnknownColumn,
}

/// Columns in display order plus every task on the board.
///
/// Every task id in `tasks` appears in exactly one column's `task_ids`, and
/// every id in a column resolves in `tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: HashMap<TaskId, Task>,
}

impl Board {
    /// Create a board with the given (empty) columns
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            tasks: HashMap::new(),
        }
    }

    /// The default workflow: To Do, Doing, Done
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column::new("todo", "To Do"),
            Column::new("doing", "Doing"),
            Column::new("done", "Done"),
        ]
    }

    /// Find a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// The leftmost column, where new tasks land by default
    pub fn first_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    /// Find a task by id
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Locate the column holding `id` by linear scan; the first match wins.
    pub fn locate(&self, id: &TaskId) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|c| c.contains(id))
            .map(|c| &c.id)
    }

    /// Insert a new task or replace an existing one's fields.
    ///
    /// A replaced task keeps its column and position. A new task is appended
    /// to `column`, or to the first column when none is given.
    pub fn upsert_task(&mut self, task: Task, column: Option<&ColumnId>) -> Result<()> {
        if let Some(existing) = self.tasks.get_mut(&task.id) {
            *existing = task;
            return Ok(());
        }

        let target = match column {
            Some(id) => self
                .columns
                .iter_mut()
                .find(|c| &c.id == id)
                .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })?,
            None => self
                .columns
                .first_mut()
                .ok_or_else(|| BoardError::missing_field("column"))?,
        };
        target.task_ids.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Remove a task from the map and from every column. Returns whether
    /// anything was removed.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let mut removed = self.tasks.remove(id).is_some();
        for column in &mut self.columns {
            let before = column.task_ids.len();
            column.task_ids.retain(|t| t != id);
            removed |= column.task_ids.len() != before;
        }
        removed
    }

    /// Move a task to the tail of `target`, splicing it out of its current
    /// column.
    pub fn move_task(&mut self, id: &TaskId, target: &ColumnId) -> TaskMove {
        let Some(to) = self.columns.iter().position(|c| &c.id == target) else {
            return TaskMove::UnknownColumn;
        };
        let Some(from) = self.columns.iter().position(|c| c.contains(id)) else {
            return TaskMove::NotOnBoard;
        };
        if from == to {
            return TaskMove::AlreadyThere;
        }

        let source = &mut self.columns[from];
        if let Some(index) = source.task_ids.iter().position(|t| t == id) {
            source.task_ids.remove(index);
        }
        let from_id = source.id.clone();
        self.columns[to].task_ids.push(id.clone());

        TaskMove::Moved { from: from_id }
    }

    /// Tasks of a column in manual order. Ids that no longer resolve are
    /// skipped. `None` when the column does not exist.
    pub fn list_column(&self, id: &ColumnId) -> Option<Vec<&Task>> {
        self.column(id)
            .map(|c| c.task_ids.iter().filter_map(|t| self.tasks.get(t)).collect())
    }

    /// Verify the partition: each task in exactly one column, each column
    /// entry resolvable.
    pub fn check_partition(&self) -> Result<()> {
        for task_id in self.tasks.keys() {
            let holders: Vec<String> = self
                .columns
                .iter()
                .filter(|c| c.contains(task_id))
                .map(|c| c.id.to_string())
                .collect();
            let occurrences: usize = self
                .columns
                .iter()
                .map(|c| c.task_ids.iter().filter(|t| *t == task_id).count())
                .sum();
            if occurrences != 1 {
                return Err(BoardError::PartitionViolation {
                    task: task_id.to_string(),
                    columns: holders,
                });
            }
        }

        for column in &self.columns {
            if let Some(dangling) = column.task_ids.iter().find(|t| !self.tasks.contains_key(*t)) {
                return Err(BoardError::PartitionViolation {
                    task: dangling.to_string(),
                    columns: vec![column.id.to_string()],
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(doing: &[&str]) -> Board {
        let mut board = Board::new(Board::default_columns());
        for id in doing {
            board
                .upsert_task(Task::with_id(*id, *id), Some(&ColumnId::from("doing")))
                .unwrap();
        }
        board
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(&ColumnId::from(column))
            .unwrap()
            .task_ids
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_upsert_appends_new_and_replaces_existing() {
        let mut board = board_with(&["t1", "t2"]);
        board
            .upsert_task(Task::with_id("t1", "edited"), Some(&ColumnId::from("done")))
            .unwrap();

        assert_eq!(board.task(&TaskId::from("t1")).unwrap().content, "edited");
        assert_eq!(ids(&board, "doing"), vec!["t1", "t2"]);
        assert!(ids(&board, "done").is_empty());
    }

    #[test]
    fn test_upsert_defaults_to_first_column() {
        let mut board = Board::new(Board::default_columns());
        board.upsert_task(Task::with_id("t1", "x"), None).unwrap();
        assert_eq!(ids(&board, "todo"), vec!["t1"]);
    }

    #[test]
    fn test_upsert_into_unknown_column_fails_without_change() {
        let mut board = Board::new(Board::default_columns());
        let result = board.upsert_task(Task::with_id("t1", "x"), Some(&ColumnId::from("nope")));
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn test_move_appends_at_tail() {
        let mut board = board_with(&["t1", "t2"]);
        board
            .upsert_task(Task::with_id("t3", "x"), Some(&ColumnId::from("done")))
            .unwrap();

        let result = board.move_task(&TaskId::from("t1"), &ColumnId::from("done"));

        assert_eq!(result, TaskMove::Moved { from: ColumnId::from("doing") });
        assert_eq!(ids(&board, "doing"), vec!["t2"]);
        assert_eq!(ids(&board, "done"), vec!["t3", "t1"]);
        board.check_partition().unwrap();
    }

    #[test]
    fn test_move_into_same_column_is_noop() {
        let mut board = board_with(&["t1", "t2"]);
        let before = board.clone();
        assert_eq!(
            board.move_task(&TaskId::from("t1"), &ColumnId::from("doing")),
            TaskMove::AlreadyThere
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_purges_every_column() {
        let mut board = board_with(&["t1", "t2"]);
        // Simulate a stray duplicate reference
        board.columns[2].task_ids.push(TaskId::from("t1"));

        assert!(board.remove_task(&TaskId::from("t1")));
        assert!(!board.remove_task(&TaskId::from("t1")));
        assert_eq!(ids(&board, "doing"), vec!["t2"]);
        assert!(ids(&board, "done").is_empty());
        board.check_partition().unwrap();
    }

    #[test]
    fn test_list_column_skips_dangling_ids() {
        let mut board = board_with(&["t1", "t2"]);
        board.tasks.remove(&TaskId::from("t1"));

        let listed: Vec<_> = board
            .list_column(&ColumnId::from("doing"))
            .unwrap()
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(listed, vec!["t2"]);
        assert!(board.list_column(&ColumnId::from("missing")).is_none());
    }

    #[test]
    fn test_check_partition_flags_duplicates_and_dangling() {
        let mut board = board_with(&["t1"]);
        board.columns[0].task_ids.push(TaskId::from("t1"));
        assert!(matches!(
            board.check_partition(),
            Err(BoardError::PartitionViolation { .. })
        ));

        let mut board = board_with(&["t1"]);
        board.columns[0].task_ids.push(TaskId::from("ghost"));
        assert!(matches!(
            board.check_partition(),
            Err(BoardError::PartitionViolation { .. })
        ));
    }

    #[test]
    fn test_locate_uses_first_match() {
        let mut board = board_with(&["t1"]);
        board.columns[0].task_ids.push(TaskId::from("t1"));
        assert_eq!(board.locate(&TaskId::from("t1")), Some(&ColumnId::from("todo")));
    }
}
