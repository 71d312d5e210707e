//! Item references and the buckets they can be dropped into

use super::ids::{ColumnId, PostId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reference to a draggable item.
///
/// The textual form (`task:<id>` / `post:<n>`) is what a presentation layer
/// carries in a drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ItemRef {
    Task(TaskId),
    Post(PostId),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task:{id}"),
            Self::Post(id) => write!(f, "post:{id}"),
        }
    }
}

impl FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("task", id)) if !id.is_empty() => Ok(Self::Task(TaskId::from(id))),
            Some(("post", n)) => n
                .parse::<u64>()
                .map(|n| Self::Post(PostId(n)))
                .map_err(|_| format!("invalid post id in drag payload: {s}")),
            _ => Err(format!("unrecognised drag payload: {s}")),
        }
    }
}

impl From<TaskId> for ItemRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl From<PostId> for ItemRef {
    fn from(id: PostId) -> Self {
        Self::Post(id)
    }
}

/// A container items are listed in and dropped onto.
///
/// Column membership is stored on the column; day membership is computed
/// from each post's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Bucket {
    Column(ColumnId),
    Day(NaiveDate),
}

impl Bucket {
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::Day(date)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "column:{id}"),
            Self::Day(date) => write!(f, "day:{date}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_payload_text_form() {
        let task = ItemRef::Task(TaskId::from("task-1"));
        assert_eq!(task.to_string(), "task:task-1");
        assert_eq!("task:task-1".parse::<ItemRef>(), Ok(task));

        let post = ItemRef::Post(PostId(12));
        assert_eq!("post:12".parse::<ItemRef>(), Ok(post));

        assert!("post:abc".parse::<ItemRef>().is_err());
        assert!("12".parse::<ItemRef>().is_err());
        assert!("task:".parse::<ItemRef>().is_err());
    }

    #[test]
    fn test_bucket_serialization() {
        let day = Bucket::day(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["kind"], "day");
        assert_eq!(json["id"], "2024-01-12");
    }
}
