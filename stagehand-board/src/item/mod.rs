//! Commands that accept either kind of item

mod delete;
mod list;
mod mv;

pub use delete::DeleteItem;
pub use list::ListBucket;
pub use mv::MoveItem;

pub(crate) use mv::{commit_move, MoveReport};
