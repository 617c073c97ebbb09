//! OperationProcessor - executes operations and records the activity feed

use std::fmt::Display;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::{Execute, LogEntry, Operation};

/// Executes operations against a context and records each execution in a
/// session-scoped activity feed.
///
/// The feed is in-memory only and dies with the session; it exists so views
/// can show "what just happened" and so tests can assert on operation
/// history.
#[derive(Debug, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
    entries: Vec<LogEntry>,
}

impl OperationProcessor {
    /// Create a processor with no attributed actor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor attributing operations to the given actor
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
            entries: Vec::new(),
        }
    }

    /// Execute an operation and append a log entry for it.
    ///
    /// Failures are logged too, with the error message as the output payload.
    pub fn process<Ctx, Err, O>(&mut self, op: &O, ctx: &mut Ctx) -> Result<Value, Err>
    where
        O: Execute<Ctx, Err> + Operation + Serialize,
        Err: Display,
    {
        let start = Instant::now();
        let input = serde_json::to_value(op).unwrap_or(Value::Null);

        let result = op.execute(ctx);
        let duration_ms = start.elapsed().as_millis() as u64;

        let output = match &result {
            Ok(value) => value.clone(),
            Err(error) => serde_json::json!({ "error": error.to_string() }),
        };
        self.entries.push(LogEntry::new(
            op.op_string(),
            input,
            output,
            self.actor.clone(),
            duration_ms,
        ));

        result
    }

    /// The activity feed, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Drain the activity feed, leaving it empty
    pub fn take_entries(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.entries)
    }
}
