//! Card types: Card, Attachment

use std::collections::BTreeSet;

use super::ids::{AttachmentId, BoardId, CardId, ColumnId, UserId};
use super::label::Label;
use crate::object_url::ObjectUrl;
use serde::{Deserialize, Serialize};

/// A single task/work item belonging to one column and one board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// The column this card currently sits in
    pub column: ColumnId,
    /// The board the column belongs to
    pub board: BoardId,

    /// Applied label kinds - semantically a set, no ordering meaningful
    #[serde(default)]
    pub labels: BTreeSet<Label>,

    /// Attachments, owned exclusively by this card
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Assigned users - shared roster references, compared by id
    #[serde(default)]
    pub assignees: Vec<UserId>,
}

impl Card {
    /// Create a new card with a fresh ID and empty labels/attachments/assignees
    pub fn new(
        title: impl Into<String>,
        column: impl Into<ColumnId>,
        board: impl Into<BoardId>,
    ) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: String::new(),
            column: column.into(),
            board: board.into(),
            labels: BTreeSet::new(),
            attachments: Vec::new(),
            assignees: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Override the generated ID (seed set)
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Find an attachment by ID
    pub fn find_attachment(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.attachments.iter().find(|a| &a.id == id)
    }

    /// Check whether a user is assigned, compared by id
    pub fn is_assigned(&self, user: &UserId) -> bool {
        self.assignees.contains(user)
    }
}

/// A file reference staged on a card.
///
/// The `url` is a session-scoped handle minted by the
/// [`ObjectUrlRegistry`](crate::object_url::ObjectUrlRegistry); whoever
/// discards the attachment releases it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub url: ObjectUrl,
    /// The file's declared MIME type, possibly empty
    #[serde(default)]
    pub mime_type: String,
}

impl Attachment {
    /// Create a new attachment around an acquired URL
    pub fn new(name: impl Into<String>, url: ObjectUrl, mime_type: impl Into<String>) -> Self {
        Self {
            id: AttachmentId::new(),
            name: name.into(),
            url,
            mime_type: mime_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_url::ObjectUrlRegistry;

    #[test]
    fn test_card_creation() {
        let card = Card::new("Buy milk", "todo", "1");
        assert_eq!(card.title, "Buy milk");
        assert!(card.description.is_empty());
        assert!(card.labels.is_empty());
        assert!(card.attachments.is_empty());
        assert!(card.assignees.is_empty());
        assert_eq!(card.column.as_str(), "todo");
        assert_eq!(card.board.as_str(), "1");
    }

    #[test]
    fn test_labels_are_a_set() {
        let mut card = Card::new("Task", "todo", "1");
        card.labels.insert(Label::Bug);
        card.labels.insert(Label::Bug);
        assert_eq!(card.labels.len(), 1);
    }

    #[test]
    fn test_find_attachment() {
        let mut registry = ObjectUrlRegistry::new();
        let mut card = Card::new("Task", "todo", "1");
        let attachment = Attachment::new("notes.txt", registry.acquire(), "text/plain");
        let id = attachment.id.clone();
        card.attachments.push(attachment);

        assert!(card.find_attachment(&id).is_some());
        assert!(card.find_attachment(&AttachmentId::from("missing")).is_none());
    }

    #[test]
    fn test_card_serialization_round_trip() {
        let mut card = Card::new("Task", "todo", "1").with_description("Details");
        card.labels.insert(Label::Front);
        let json = serde_json::to_string(&card).unwrap();
        let parsed: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, card);
    }
}
