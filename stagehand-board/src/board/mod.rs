//! Board commands

mod init;

pub use init::InitBoard;
