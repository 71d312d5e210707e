//! Execution result types for operations

use crate::LogEntry;

/// Result of executing an operation
///
/// The variant tells the caller whether the context's state moved:
/// - Applied: state changed; the entry goes to the activity log
/// - Unchanged: a read, or a request that resolved to a no-op (stale id,
///   drop onto the bucket the item already occupies)
/// - Failed: nothing changed; the error is for the caller to surface
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// State changed and should be logged
    Applied { value: T, log_entry: LogEntry },
    /// State untouched
    Unchanged { value: T },
    /// Operation rejected, state untouched
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Applied { value, .. } => Ok(value),
            Self::Unchanged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Applied { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unchanged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// True when the operation moved the context to a new state
    pub fn changed_state(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Applied { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}
