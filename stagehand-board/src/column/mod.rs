//! Column commands

mod add;
mod get;
mod list;

pub use add::AddColumn;
pub use get::GetColumn;
pub use list::ListColumns;
