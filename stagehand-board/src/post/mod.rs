//! Scheduled post commands

mod add;
mod delete;
mod form;
mod list;
mod mv;
mod update;

pub use add::AddPost;
pub use delete::DeletePost;
pub use form::PostForm;
pub use list::{ListDay, ListWeek};
pub use mv::MovePost;
pub use update::UpdatePost;
