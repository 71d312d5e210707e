//! Board engine for an artist's content operations
//!
//! This crate holds the state behind the dashboard: a kanban board of tasks,
//! a chronological schedule of posts shown as a window of day buckets, and a
//! log of fan requests. Everything lives in memory in a [`BoardContext`].
//!
//! ## Overview
//!
//! - **Snapshots** - State is an immutable [`Snapshot`]; every change commits
//!   a new one and publishes a [`StoreEvent`]
//! - **Stored vs derived membership** - Columns own an ordered list of task
//!   ids; a post's day is computed from its timestamp
//! - **Commands** - Each operation is a struct implementing [`Execute`]
//! - **Drag and drop** - A [`DragSession`] carries one drag from start to
//!   drop, and [`resolve_move`] decides where the item lands
//!
//! ## Basic Usage
//!
//! ```rust
//! use stagehand_board::{BoardContext, Bucket, DragSession, Execute, task::AddTask};
//!
//! let mut ctx = BoardContext::new();
//! let added = AddTask::new("Design the cover art")
//!     .in_column("doing")
//!     .execute(&mut ctx)
//!     .into_result()
//!     .unwrap();
//!
//! let mut drag = DragSession::new();
//! assert!(drag.start_from_payload(ctx.state(), &format!("task:{}", added["id"].as_str().unwrap())));
//! drag.drop_on(&mut ctx, Some(&Bucket::column("done")));
//!
//! assert_eq!(ctx.state().board.column(&"done".into()).unwrap().task_ids.len(), 1);
//! ```

mod context;
pub mod defaults;
mod drag;
mod error;
mod event;
mod outcome;
mod resolve;
pub mod types;

pub mod analytics;
pub mod calendar;

// Command modules
pub mod board;
pub mod column;
pub mod item;
pub mod post;
pub mod request;
pub mod task;

pub use context::BoardContext;
pub use drag::{DragSession, DropOutcome};
pub use error::{BoardError, Result};
pub use event::{Change, StoreEvent};
pub use resolve::{resolve_move, Resolution, UnchangedReason};
pub use types::{
    Board, Bucket, BucketItems, Column, ColumnId, ContentType, FanRequest, Item, ItemRef,
    Platform, PostId, PostStatus, RequestId, RequestLog, RequestStatus, Schedule, ScheduledPost,
    Snapshot, Task, TaskId,
};

// Re-export the operation traits commands are driven through
pub use stagehand_operations::{
    ActivitySink, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};
