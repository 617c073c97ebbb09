//! Log entry types for operation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an operation execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add card", "move card")
    pub op: String,

    /// The normalized input parameters (as JSON)
    pub input: Value,

    /// The result value or error (as JSON)
    pub output: Value,

    /// Who performed the operation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
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

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_ids_unique() {
        let a = LogEntry::new("add card", json!({}), json!({}), None, 0);
        let b = LogEntry::new("add card", json!({}), json!({}), None, 0);
        assert_ne!(a.id, b.id);
        // ULIDs are 26 chars
        assert_eq!(a.id.len(), 26);
    }

    #[test]
    fn test_log_entry_actor_skipped_when_absent() {
        let entry = LogEntry::new("move card", json!({"id": "1"}), json!({}), None, 3);
        let serialized = serde_json::to_string(&entry).unwrap();
        assert!(!serialized.contains("\"actor\""));

        let entry = entry.with_actor("jane");
        let serialized = serde_json::to_string(&entry).unwrap();
        assert!(serialized.contains("\"actor\":\"jane\""));
    }
}
