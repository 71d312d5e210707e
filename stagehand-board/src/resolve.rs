//! Move resolution: where a dropped item ends up
//!
//! [`resolve_move`] is a pure function from the current snapshot, the dragged
//! item and the drop target to either the next snapshot or the reason nothing
//! changes. It never touches the store; committing is the caller's job.

use crate::event::Change;
use crate::types::{Bucket, ItemRef, Snapshot, TaskMove};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Why a move left the snapshot as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnchangedReason {
    /// The item no longer exists
    StaleItem,
    /// The item already sits in the target bucket
    AlreadyInBucket,
    /// The target column does not exist
    UnknownTarget,
    /// A task dropped on a day, or a post dropped on a column
    IncompatibleBucket,
}

impl fmt::Display for UnchangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StaleItem => "item no longer exists",
            Self::AlreadyInBucket => "item is already there",
            Self::UnknownTarget => "target does not exist",
            Self::IncompatibleBucket => "item cannot be dropped there",
        })
    }
}

/// Outcome of resolving a move
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The snapshot to commit and the change to announce
    Moved { next: Snapshot, change: Change },
    Unchanged(UnchangedReason),
}

/// Resolve dropping `item` onto `target`.
///
/// Tasks leave their column and are appended to the target column. Posts
/// take the target day's date and keep their time of day; the schedule is
/// re-sorted with ties in their prior order.
pub fn resolve_move(current: &Snapshot, item: &ItemRef, target: &Bucket) -> Resolution {
    match (item, target) {
        (ItemRef::Task(id), Bucket::Column(column)) => {
            if current.board.task(id).is_none() {
                return Resolution::Unchanged(UnchangedReason::StaleItem);
            }
            if current.board.column(column).is_none() {
                return Resolution::Unchanged(UnchangedReason::UnknownTarget);
            }
            match current.board.locate(id) {
                None => {
                    warn!(task = %id, "task is in no column; refusing to move it");
                    return Resolution::Unchanged(UnchangedReason::StaleItem);
                }
                Some(from) if from == column => {
                    return Resolution::Unchanged(UnchangedReason::AlreadyInBucket);
                }
                Some(_) => {}
            }

            let mut next = current.clone();
            match next.board.move_task(id, column) {
                TaskMove::Moved { from } => Resolution::Moved {
                    next,
                    change: Change::TaskMoved {
                        id: id.clone(),
                        from,
                        to: column.clone(),
                    },
                },
                TaskMove::AlreadyThere => Resolution::Unchanged(UnchangedReason::AlreadyInBucket),
                TaskMove::NotOnBoard => Resolution::Unchanged(UnchangedReason::StaleItem),
                TaskMove::UnknownColumn => Resolution::Unchanged(UnchangedReason::UnknownTarget),
            }
        }
        (ItemRef::Post(id), Bucket::Day(day)) => {
            let Some(post) = current.schedule.get(*id) else {
                return Resolution::Unchanged(UnchangedReason::StaleItem);
            };
            if post.day() == *day {
                return Resolution::Unchanged(UnchangedReason::AlreadyInBucket);
            }

            let mut next = current.clone();
            match next.schedule.reschedule(*id, *day) {
                Some(from) => Resolution::Moved {
                    next,
                    change: Change::PostMoved {
                        id: *id,
                        from,
                        to: *day,
                    },
                },
                None => Resolution::Unchanged(UnchangedReason::StaleItem),
            }
        }
        _ => Resolution::Unchanged(UnchangedReason::IncompatibleBucket),
    }
}
