//! BoardContext - the in-memory store every command runs against
//!
//! The context owns the current [`Snapshot`] and hands out cheap shared
//! copies of it. Commands read a snapshot, build the next one and call
//! [`BoardContext::commit`], which swaps it in, bumps the version and
//! notifies subscribers. No business logic lives here.

use crate::defaults;
use crate::event::{Change, StoreEvent};
use crate::types::{Board, PostId, RequestId, Snapshot};
use chrono::NaiveDate;
use stagehand_operations::{ActivitySink, LogEntry};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

/// Subscribers that fall further behind than this miss events
const EVENT_CAPACITY: usize = 256;

/// Oldest activity entries are dropped past this many
const ACTIVITY_LIMIT: usize = 500;

/// Context passed to every command
pub struct BoardContext {
    state: Arc<Snapshot>,
    version: u64,
    next_post: u64,
    next_request: u64,
    /// Newest first
    activity: Vec<LogEntry>,
    events: broadcast::Sender<StoreEvent>,
}

impl BoardContext {
    /// Empty store with the default To Do / Doing / Done columns
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot {
            board: Board::new(Board::default_columns()),
            ..Snapshot::default()
        })
    }

    /// Store starting from an existing snapshot. The snapshot is held to the
    /// same partition check as [`BoardContext::commit`].
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        check_invariants(&snapshot, "loading snapshot");
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let next_post = snapshot.schedule.max_id().map_or(1, |id| id.0 + 1);
        let next_request = snapshot.requests.max_id().map_or(1, |id| id.0 + 1);
        Self {
            state: Arc::new(snapshot),
            version: 0,
            next_post,
            next_request,
            activity: Vec::new(),
            events,
        }
    }

    /// Store filled with the demo board, schedule and request log, with
    /// posts placed relative to `today`
    pub fn seeded(today: NaiveDate) -> Self {
        Self::with_snapshot(defaults::demo_snapshot(today))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state)
    }

    /// Borrow the current snapshot
    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    /// Number of commits so far
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Receive a [`StoreEvent`] for every future commit
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Applied operations, newest first
    pub fn activity(&self) -> &[LogEntry] {
        &self.activity
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Reserve the next post id
    pub fn allocate_post_id(&mut self) -> PostId {
        let id = PostId(self.next_post);
        self.next_post += 1;
        id
    }

    /// Reserve the next fan request id
    pub fn allocate_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        id
    }

    /// Make `next` the current snapshot and publish `change`.
    ///
    /// Debug builds panic when the task partition is broken; release builds
    /// log it and carry on.
    pub fn commit(&mut self, next: Snapshot, change: Change) -> u64 {
        check_invariants(&next, "committing snapshot");

        self.state = Arc::new(next);
        self.version += 1;
        debug!(version = self.version, ?change, "committed snapshot");

        let event = StoreEvent {
            version: self.version,
            change,
        };
        if self.events.send(event).is_err() {
            trace!(version = self.version, "no subscribers for store event");
        }
        self.version
    }
}

/// Debug builds panic on a broken task partition or an unsorted schedule;
/// release builds log it.
fn check_invariants(snapshot: &Snapshot, action: &str) {
    let partition = snapshot.board.check_partition();
    debug_assert!(partition.is_ok(), "board partition broken: {partition:?}");
    if let Err(violation) = partition {
        warn!(%violation, action, "broken task partition");
    }

    let sorted = snapshot.schedule.is_sorted();
    debug_assert!(sorted, "schedule out of chronological order");
    if !sorted {
        warn!(action, "schedule out of chronological order");
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivitySink for BoardContext {
    fn record(&mut self, entry: LogEntry) {
        self.activity.insert(0, entry);
        self.activity.truncate(ACTIVITY_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bucket, ColumnId, ItemRef, Task};
    use serde_json::json;

    #[test]
    fn test_new_context_has_default_columns() {
        let ctx = BoardContext::new();
        let titles: Vec<_> = ctx.state().board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "Doing", "Done"]);
        assert_eq!(ctx.version(), 0);
    }

    #[test]
    fn test_commit_bumps_version_and_notifies() {
        let mut ctx = BoardContext::new();
        let mut rx = ctx.subscribe();
        let before = ctx.snapshot();

        let mut next = (*ctx.snapshot()).clone();
        next.board
            .upsert_task(Task::with_id("t1", "Write teaser"), None)
            .unwrap();
        let version = ctx.commit(
            next,
            Change::TaskAdded {
                id: "t1".into(),
                column: ColumnId::from("todo"),
            },
        );

        assert_eq!(version, 1);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.version, 1);
        assert!(matches!(event.change, Change::TaskAdded { .. }));

        // Earlier snapshot handles are unaffected
        assert!(before.board.tasks.is_empty());
        assert_eq!(ctx.state().board.tasks.len(), 1);
    }

    #[test]
    fn test_commit_without_subscribers_is_fine() {
        let mut ctx = BoardContext::new();
        let next = (*ctx.snapshot()).clone();
        ctx.commit(next, Change::BoardInitialized { columns: 3 });
        assert_eq!(ctx.version(), 1);
    }

    #[test]
    fn test_id_allocation_continues_after_seed() {
        let mut ctx = BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        let max = ctx.state().schedule.max_id().unwrap();
        assert_eq!(ctx.allocate_post_id(), PostId(max.0 + 1));
        assert_eq!(ctx.allocate_post_id(), PostId(max.0 + 2));
    }

    #[test]
    fn test_loaded_snapshot_lists_days_in_time_order() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "board": { "columns": [], "tasks": {} },
            "schedule": [
                {
                    "id": 1,
                    "title": "Evening drop",
                    "content_type": "reel",
                    "platform": "Instagram",
                    "scheduled_at": "2024-01-10T20:00:00"
                },
                {
                    "id": 2,
                    "title": "Morning teaser",
                    "content_type": "image",
                    "platform": "TikTok",
                    "scheduled_at": "2024-01-10T08:00:00"
                }
            ]
        }))
        .unwrap();

        let ctx = BoardContext::with_snapshot(snapshot);

        assert!(ctx.state().schedule.is_sorted());
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let listed = ctx.state().list_bucket(&Bucket::Day(day)).refs();
        assert_eq!(listed, vec![ItemRef::Post(PostId(2)), ItemRef::Post(PostId(1))]);
    }

    #[test]
    fn test_activity_is_newest_first() {
        let mut ctx = BoardContext::new();
        ctx.record(LogEntry::new("add task", json!({}), json!({}), None, 0));
        ctx.record(LogEntry::new("move task", json!({}), json!({}), None, 0));
        assert_eq!(ctx.activity()[0].op, "move task");
        assert_eq!(ctx.activity().len(), 2);
    }
}
