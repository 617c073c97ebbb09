//! Typed entity IDs
//!
//! Each entity kind gets its own newtype so a `CardId` can never be passed
//! where a `ColumnId` is expected. Fresh IDs are ULIDs; the seed set uses
//! human-readable slugs, so the inner representation is a string that admits
//! both forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed ID
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing ID string (seed slugs, deserialized values)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id!(
    /// Identifies a board
    BoardId
);
entity_id!(
    /// Identifies a column
    ColumnId
);
entity_id!(
    /// Identifies a card
    CardId
);
entity_id!(
    /// Identifies a user in the shared roster
    UserId
);
entity_id!(
    /// Identifies an attachment on a card
    AttachmentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_ulids() {
        let id = CardId::new();
        assert_eq!(id.as_str().len(), 26);
        assert_ne!(id, CardId::new());
    }

    #[test]
    fn test_slug_ids_round_trip() {
        let id = ColumnId::from("todo");
        assert_eq!(id.as_str(), "todo");
        assert_eq!(id.to_string(), "todo");
        assert_eq!(id, ColumnId::from_string("todo"));
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = BoardId::from("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
        let parsed: BoardId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(parsed, id);
    }
}
