//! Operation processor: execute, attribute, record

use crate::{Execute, LogEntry};
use serde_json::Value;

/// A context that keeps an activity log
pub trait ActivitySink {
    fn record(&mut self, entry: LogEntry);
}

/// Runs operations and writes their log entries to the context.
///
/// Applied operations and logged failures are recorded; reads and no-ops
/// are not.
#[derive(Debug, Clone, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
}

impl OperationProcessor {
    /// Processor without actor attribution
    pub fn new() -> Self {
        Self { actor: None }
    }

    /// Processor that stamps every entry with `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    /// The actor stamped on entries, if any
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute `op` against `ctx` and record its entry
    pub fn process<C, E, O>(&self, op: &O, ctx: &mut C) -> Result<Value, E>
    where
        C: ActivitySink,
        O: Execute<C, E> + ?Sized,
    {
        let (result, entry) = op.execute(ctx).split();
        if let Some(mut entry) = entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            ctx.record(entry);
        }
        result
    }
}
