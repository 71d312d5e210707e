//! Drag session: the one in-flight drag between its start and its drop
//!
//! The session is a plain value the presentation layer keeps and passes back
//! on every drag event. A drop or a cancel always leaves it [`DragSession::Idle`],
//! whatever happened to the move.

use crate::context::BoardContext;
use crate::item::{MoveItem, MoveReport};
use crate::outcome::finish;
use crate::resolve::UnchangedReason;
use crate::types::{Bucket, ItemRef, Snapshot};
use stagehand_operations::ActivitySink;
use std::time::Instant;
use tracing::{debug, warn};

/// Current drag state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        item: ItemRef,
        /// Bucket the item was picked up from
        origin: Bucket,
    },
}

/// How a drop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was committed at this store version
    Moved { version: u64 },
    /// The drop resolved to a no-op
    Unchanged(UnchangedReason),
    /// Released outside any bucket
    NoTarget,
    /// Nothing was being dragged
    NotDragging,
}

impl DragSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Begin dragging `item`. An unfinished session is discarded.
    pub fn start(&mut self, item: ItemRef, origin: Bucket) {
        if let Self::Dragging { item: stale, .. } = self {
            warn!(%stale, replacement = %item, "drag started while another was active");
        }
        debug!(%item, %origin, "drag started");
        *self = Self::Dragging { item, origin };
    }

    /// Begin dragging from a textual payload such as `task:task-1` or
    /// `post:3`. Returns false, leaving the session idle, when the payload
    /// does not parse or names an item that is gone.
    pub fn start_from_payload(&mut self, snapshot: &Snapshot, payload: &str) -> bool {
        let item: ItemRef = match payload.parse() {
            Ok(item) => item,
            Err(error) => {
                warn!(payload, %error, "ignoring malformed drag payload");
                *self = Self::Idle;
                return false;
            }
        };
        match snapshot.bucket_of(&item) {
            Some(origin) => {
                self.start(item, origin);
                true
            }
            None => {
                debug!(%item, "drag payload names an item that no longer exists");
                *self = Self::Idle;
                false
            }
        }
    }

    /// The payload to hand across a boundary for the dragged item
    pub fn payload(&self) -> Option<String> {
        self.item().map(ToString::to_string)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn item(&self) -> Option<&ItemRef> {
        match self {
            Self::Dragging { item, .. } => Some(item),
            Self::Idle => None,
        }
    }

    pub fn origin(&self) -> Option<&Bucket> {
        match self {
            Self::Dragging { origin, .. } => Some(origin),
            Self::Idle => None,
        }
    }

    /// Finish the drag over `target` (`None` when released outside every
    /// bucket). Applied moves are committed and recorded in the activity
    /// log. The session is idle afterwards in every case.
    pub fn drop_on(&mut self, ctx: &mut BoardContext, target: Option<&Bucket>) -> DropOutcome {
        let Self::Dragging { item, .. } = std::mem::take(self) else {
            return DropOutcome::NotDragging;
        };
        let Some(target) = target else {
            debug!(%item, "drag released outside any bucket");
            return DropOutcome::NoTarget;
        };

        let start = Instant::now();
        let op = MoveItem::new(item, target.clone());
        let report = op.report(ctx);
        let outcome = match &report {
            MoveReport::Moved { version, .. } => DropOutcome::Moved { version: *version },
            MoveReport::Unchanged(reason) => DropOutcome::Unchanged(*reason),
        };

        let (_, entry) = finish(&op, start, report.into_outcome()).split();
        if let Some(entry) = entry {
            ctx.record(entry);
        }
        outcome
    }

    /// Abandon the drag. Returns the item that was being dragged.
    pub fn cancel(&mut self) -> Option<ItemRef> {
        match std::mem::take(self) {
            Self::Dragging { item, .. } => {
                debug!(%item, "drag cancelled");
                Some(item)
            }
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, PostId, TaskId};
    use chrono::NaiveDate;

    fn seeded() -> BoardContext {
        BoardContext::seeded(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
    }

    #[test]
    fn test_drop_moves_and_returns_to_idle() {
        let mut ctx = seeded();
        let mut session = DragSession::new();

        session.start(TaskId::from("task-1").into(), Bucket::column("todo"));
        assert!(session.is_dragging());
        let outcome = session.drop_on(&mut ctx, Some(&Bucket::column("done")));

        assert_eq!(outcome, DropOutcome::Moved { version: 1 });
        assert_eq!(session, DragSession::Idle);
        assert_eq!(ctx.state().board.locate(&"task-1".into()), Some(&ColumnId::from("done")));
        assert_eq!(ctx.activity()[0].op, "move item");
    }

    #[test]
    fn test_drop_outside_any_bucket_changes_nothing() {
        let mut ctx = seeded();
        let before = ctx.snapshot();
        let mut session = DragSession::new();

        session.start(PostId(2).into(), Bucket::day(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        let outcome = session.drop_on(&mut ctx, None);

        assert_eq!(outcome, DropOutcome::NoTarget);
        assert!(!session.is_dragging());
        assert_eq!(*ctx.snapshot(), *before);
        assert!(ctx.activity().is_empty());
    }

    #[test]
    fn test_drop_on_origin_is_unchanged() {
        let mut ctx = seeded();
        let mut session = DragSession::new();

        session.start(TaskId::from("task-4").into(), Bucket::column("doing"));
        let outcome = session.drop_on(&mut ctx, Some(&Bucket::column("doing")));

        assert_eq!(outcome, DropOutcome::Unchanged(UnchangedReason::AlreadyInBucket));
        assert_eq!(ctx.version(), 0);
        assert!(ctx.activity().is_empty());
    }

    #[test]
    fn test_drop_when_idle() {
        let mut ctx = seeded();
        let mut session = DragSession::new();

        let outcome = session.drop_on(&mut ctx, Some(&Bucket::column("done")));
        assert_eq!(outcome, DropOutcome::NotDragging);
    }

    #[test]
    fn test_cancel() {
        let mut session = DragSession::new();
        session.start(TaskId::from("task-1").into(), Bucket::column("todo"));

        assert_eq!(session.cancel(), Some(ItemRef::Task("task-1".into())));
        assert_eq!(session.cancel(), None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_start_replaces_active_session() {
        let mut session = DragSession::new();
        session.start(TaskId::from("task-1").into(), Bucket::column("todo"));
        session.start(TaskId::from("task-4").into(), Bucket::column("doing"));

        assert_eq!(session.item(), Some(&ItemRef::Task("task-4".into())));
        assert_eq!(session.origin(), Some(&Bucket::column("doing")));
    }

    #[test]
    fn test_payload_handoff() {
        let mut ctx = seeded();
        let mut picked_up = DragSession::new();
        let origin = Bucket::day(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        picked_up.start(PostId(1).into(), origin);
        let payload = picked_up.payload().unwrap();
        assert_eq!(payload, "post:1");

        // The drop handler only sees the payload
        let mut session = DragSession::new();
        assert!(session.start_from_payload(ctx.state(), &payload));
        let target = Bucket::day(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert!(matches!(session.drop_on(&mut ctx, Some(&target)), DropOutcome::Moved { .. }));
    }

    #[test]
    fn test_bad_payloads_leave_session_idle() {
        let ctx = seeded();
        let mut session = DragSession::new();

        assert!(!session.start_from_payload(ctx.state(), "banana"));
        assert!(!session.start_from_payload(ctx.state(), "task:task-404"));
        assert!(!session.is_dragging());
    }
}
