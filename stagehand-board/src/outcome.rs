//! Turning a command body's result into an [`ExecutionResult`]

use crate::error::{BoardError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use stagehand_operations::{ExecutionResult, LogEntry, Operation};
use std::time::Instant;
use tracing::trace;

/// What a command body did
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Committed a new snapshot
    Changed(Value),
    /// A read, or a request that resolved to a no-op
    Unchanged(Value),
}

/// Wrap `result` with timing and a log entry built from the command itself
pub(crate) fn finish<O>(
    op: &O,
    start: Instant,
    result: Result<Outcome>,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Outcome::Changed(value)) => ExecutionResult::Applied {
            log_entry: LogEntry::new(
                op.op_string(),
                input_of(op),
                value.clone(),
                None,
                duration_ms,
            ),
            value,
        },
        Ok(Outcome::Unchanged(value)) => {
            trace!(op = %op.op_string(), "no state change");
            ExecutionResult::Unchanged { value }
        }
        Err(error) => {
            let error_msg = error.to_string();
            ExecutionResult::Failed {
                log_entry: Some(LogEntry::new(
                    op.op_string(),
                    input_of(op),
                    json!({ "error": error_msg }),
                    None,
                    duration_ms,
                )),
                error,
            }
        }
    }
}

/// Response body for a request that left state untouched
pub(crate) fn unchanged(reason: impl Serialize) -> Value {
    json!({ "changed": false, "reason": reason })
}

fn input_of<O: Serialize>(op: &O) -> Value {
    serde_json::to_value(op).unwrap_or(Value::Null)
}

/// Wrap the result of a read-only command
pub(crate) fn read(result: Result<Value>) -> ExecutionResult<Value, BoardError> {
    match result {
        Ok(value) => ExecutionResult::Unchanged { value },
        Err(error) => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
    }
}
