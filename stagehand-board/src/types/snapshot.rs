//! The complete store state at one version

use super::board::Board;
use super::bucket::{Bucket, ItemRef};
use super::post::{Schedule, ScheduledPost};
use super::request::RequestLog;
use super::task::Task;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Either kind of managed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Task(Task),
    Post(ScheduledPost),
}

/// What a bucket currently holds, in its display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketItems<'a> {
    Tasks(Vec<&'a Task>),
    Posts(Vec<&'a ScheduledPost>),
}

impl BucketItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Tasks(tasks) => tasks.len(),
            Self::Posts(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// References to the listed items, in order
    pub fn refs(&self) -> Vec<ItemRef> {
        match self {
            Self::Tasks(tasks) => tasks.iter().map(|t| ItemRef::Task(t.id.clone())).collect(),
            Self::Posts(posts) => posts.iter().map(|p| ItemRef::Post(p.id)).collect(),
        }
    }
}

/// Board, schedule and request log together. Snapshots are values: the
/// store replaces its snapshot wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub schedule: Schedule,
    #[serde(default)]
    pub requests: RequestLog,
}

impl Snapshot {
    /// Whether the referenced item exists
    pub fn contains(&self, item: &ItemRef) -> bool {
        match item {
            ItemRef::Task(id) => self.board.task(id).is_some(),
            ItemRef::Post(id) => self.schedule.get(*id).is_some(),
        }
    }

    /// The bucket an item currently sits in
    pub fn bucket_of(&self, item: &ItemRef) -> Option<Bucket> {
        match item {
            ItemRef::Task(id) => self.board.locate(id).cloned().map(Bucket::Column),
            ItemRef::Post(id) => self.schedule.get(*id).map(|p| Bucket::Day(p.day())),
        }
    }

    /// Items of a bucket in display order. Unknown columns list as empty.
    pub fn list_bucket(&self, bucket: &Bucket) -> BucketItems<'_> {
        match bucket {
            Bucket::Column(id) => {
                BucketItems::Tasks(self.board.list_column(id).unwrap_or_default())
            }
            Bucket::Day(day) => BucketItems::Posts(self.schedule.on_day(*day)),
        }
    }

    /// Insert or replace an item by id and return the bucket it sits in.
    ///
    /// A replaced task keeps its column and position; a new one lands at the
    /// end of the first column. Posts are re-sorted into the schedule. A new
    /// task on a board without columns has nowhere to go and is dropped,
    /// returning `None`.
    pub fn upsert_item(&mut self, item: Item) -> Option<Bucket> {
        match item {
            Item::Task(task) => {
                let id = task.id.clone();
                if let Err(error) = self.board.upsert_task(task, None) {
                    warn!(task = %id, %error, "no column to hold new task");
                    return None;
                }
                self.board.locate(&id).cloned().map(Bucket::Column)
            }
            Item::Post(post) => {
                let day = post.day();
                self.schedule.upsert(post);
                Some(Bucket::Day(day))
            }
        }
    }

    /// Delete an item wherever it lives. Returns whether anything was removed.
    pub fn delete_item(&mut self, item: &ItemRef) -> bool {
        match item {
            ItemRef::Task(id) => self.board.remove_task(id),
            ItemRef::Post(id) => self.schedule.remove(*id).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, ContentType, Platform, PostId, PostStatus, TaskId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn board_snapshot() -> Snapshot {
        let mut snapshot = Snapshot {
            board: Board::new(Board::default_columns()),
            ..Snapshot::default()
        };
        for (id, content) in [("t1", "Mix the single"), ("t2", "Book the venue")] {
            snapshot.upsert_item(Item::Task(Task::with_id(id, content)));
        }
        snapshot
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn post(id: u64, when: NaiveDateTime) -> ScheduledPost {
        ScheduledPost {
            id: PostId(id),
            title: format!("post {id}"),
            content_type: ContentType::Video,
            platform: Platform::YouTube,
            scheduled_at: when,
            status: PostStatus::Planned,
        }
    }

    fn todo_ids(snapshot: &Snapshot) -> Vec<TaskId> {
        let todo = Bucket::Column(ColumnId::from("todo"));
        snapshot
            .list_bucket(&todo)
            .refs()
            .into_iter()
            .filter_map(|r| match r {
                ItemRef::Task(id) => Some(id),
                ItemRef::Post(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_upsert_new_task_lands_in_first_column() {
        let mut snapshot = board_snapshot();

        let bucket = snapshot.upsert_item(Item::Task(Task::with_id("t3", "Print merch")));

        assert_eq!(bucket, Some(Bucket::Column(ColumnId::from("todo"))));
        assert_eq!(
            todo_ids(&snapshot),
            vec![TaskId::from("t1"), TaskId::from("t2"), TaskId::from("t3")]
        );
        assert!(snapshot.board.check_partition().is_ok());
    }

    #[test]
    fn test_upsert_existing_task_replaces_in_place() {
        let mut snapshot = board_snapshot();

        snapshot.upsert_item(Item::Task(Task::with_id("t1", "Master the single")));

        assert_eq!(todo_ids(&snapshot), vec![TaskId::from("t1"), TaskId::from("t2")]);
        assert_eq!(snapshot.board.tasks.len(), 2);
        let task = snapshot.board.task(&"t1".into()).unwrap();
        assert_eq!(task.content, "Master the single");
    }

    #[test]
    fn test_upsert_post_resorts_schedule() {
        let mut snapshot = Snapshot::default();
        snapshot.upsert_item(Item::Post(post(1, at(10, 18))));
        snapshot.upsert_item(Item::Post(post(2, at(11, 9))));

        let bucket = snapshot.upsert_item(Item::Post(post(1, at(12, 18))));

        assert_eq!(bucket, NaiveDate::from_ymd_opt(2024, 1, 12).map(Bucket::Day));
        let order: Vec<_> = snapshot.schedule.posts().iter().map(|p| p.id.0).collect();
        assert_eq!(order, vec![2, 1]);
        assert!(snapshot.schedule.is_sorted());
    }

    #[test]
    fn test_upsert_task_without_columns_is_dropped() {
        let mut snapshot = Snapshot::default();

        let bucket = snapshot.upsert_item(Item::Task(Task::with_id("t1", "Orphan")));

        assert_eq!(bucket, None);
        assert!(snapshot.board.tasks.is_empty());
        assert!(snapshot.board.check_partition().is_ok());
    }

    #[test]
    fn test_delete_item_is_idempotent() {
        let mut snapshot = board_snapshot();
        let item = ItemRef::Task("t1".into());

        assert!(snapshot.delete_item(&item));
        assert!(!snapshot.delete_item(&item));
        assert!(!snapshot.contains(&item));
        assert_eq!(todo_ids(&snapshot), vec![TaskId::from("t2")]);
    }
}
