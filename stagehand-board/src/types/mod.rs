//! Core types for the board engine

mod board;
mod bucket;
mod ids;
mod post;
mod request;
mod snapshot;
mod task;

// Re-export all types
pub use board::{Board, Column, TaskMove};
pub use bucket::{Bucket, ItemRef};
pub use ids::{ColumnId, PostId, RequestId, TaskId};
pub use post::{ContentType, Platform, PostStatus, Schedule, ScheduledPost};
pub use request::{FanRequest, RequestLog, RequestStatus};
pub use snapshot::{BucketItems, Item, Snapshot};
pub use task::Task;
