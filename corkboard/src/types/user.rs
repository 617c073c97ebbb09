//! User type

use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// A person that can be assigned to cards.
///
/// Users are owned by the process-wide roster and referenced from cards by
/// id - never embedded, so a rename is visible everywhere at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Emoji avatar shown next to the name
    pub avatar: String,
}

impl User {
    /// Create a new user with a fresh ID
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Reconstruct a user with a known ID (seed catalog)
    pub fn with_id(
        id: impl Into<UserId>,
        name: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}
