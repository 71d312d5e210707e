//! # Stagehand Operations
//!
//! Every state change in Stagehand is expressed as an operation: a struct whose
//! fields are its parameters, plus an [`Execute`] impl that runs it against a
//! context. Operations run synchronously and to completion; there is nothing to
//! await between reading the current state and committing the next one.
//!
//! ## Example
//!
//! ```ignore
//! use stagehand_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct AddTask {
//!     pub content: String,
//! }
//!
//! operation!(AddTask, verb = "add", noun = "task", description = "Add a task to a column");
//!
//! impl Execute<BoardContext, BoardError> for AddTask {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // returns Applied, Unchanged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod macros;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::{ActivitySink, OperationProcessor};

pub use serde_json::Value;
