//! The board's activity feed.
//!
//! Every command that changes the board or the schedule leaves one
//! [`LogEntry`] behind, and so does every command the board rejects.
//! No-ops such as a drop onto the item's own bucket leave nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of the activity feed: which command ran, what the manager
/// asked for and what the board answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ULID, so entries sort by creation time
    pub id: String,

    /// UTC wall clock at recording time
    pub timestamp: DateTime<Utc>,

    /// Verb and noun, e.g. "move item" for a drag-and-drop
    pub op: String,

    /// The command as submitted, e.g. the post form fields
    pub input: Value,

    /// What the board returned, or `{"error": ...}` when it refused
    pub output: Value,

    /// Who was at the board, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Attribute the entry to someone
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The board refused the command
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
