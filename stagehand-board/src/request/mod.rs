//! Fan request commands

mod add;
mod list;
mod status;

pub use add::AddFanRequest;
pub use list::ListFanRequests;
pub use status::SetFanRequestStatus;
