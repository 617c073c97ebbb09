//! ReplaceCard operation

use std::collections::BTreeSet;

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::object_url::ObjectUrl;
use crate::types::{Attachment, CardId, Label, UserId};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Merge a patch into an existing card.
///
/// Present fields replace the card's values wholesale; absent fields are
/// untouched. This is the single commit entry point of the card detail
/// editor. When the patch replaces the attachment list, URLs of dropped
/// attachments are released.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceCard {
    /// The card ID to patch
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// Replace all labels
    pub labels: Option<BTreeSet<Label>>,
    /// Replace all assignees
    pub assignees: Option<Vec<UserId>>,
    /// Replace all attachments
    pub attachments: Option<Vec<Attachment>>,
}

impl ReplaceCard {
    /// Create a new ReplaceCard operation with an empty patch
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            labels: None,
            assignees: None,
            attachments: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the labels (replaces all existing labels)
    pub fn with_labels(mut self, labels: BTreeSet<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the assignees (replaces all existing assignees)
    pub fn with_assignees(mut self, assignees: Vec<UserId>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    /// Set the attachments (replaces all existing attachments)
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }
}

impl Operation for ReplaceCard {
    fn verb(&self) -> &'static str {
        "replace"
    }
    fn noun(&self) -> &'static str {
        "card"
    }
    fn description(&self) -> &'static str {
        "Merge a patch into a card"
    }
}

impl Execute<BoardContext, BoardError> for ReplaceCard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        // URLs dropped by an attachment replacement must be released after
        // the patch lands
        let dropped: Vec<ObjectUrl> = match (&self.attachments, ctx.find_card(&self.id)) {
            (Some(new), Some(card)) => card
                .attachments
                .iter()
                .filter(|old| !new.iter().any(|a| a.url == old.url))
                .map(|old| old.url.clone())
                .collect(),
            _ => Vec::new(),
        };

        let Some(card) = ctx.find_card_mut(&self.id) else {
            return Ok(json!({ "changed": false }));
        };

        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(labels) = &self.labels {
            card.labels = labels.clone();
        }
        if let Some(assignees) = &self.assignees {
            card.assignees = assignees.clone();
        }
        if let Some(attachments) = &self.attachments {
            card.attachments = attachments.clone();
        }
        let card = card.clone();

        for url in &dropped {
            ctx.urls_mut().release(url);
        }
        ctx.mark_changed();

        debug!(card = %card.id, "replaced card fields");
        Ok(json!({ "changed": true, "card": serde_json::to_value(&card)? }))
    }
}
