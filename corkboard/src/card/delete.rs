//! DeleteCard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::CardId;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Delete exactly one card, releasing its attachment URLs
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCard {
    /// The card ID to delete
    pub id: CardId,
}

impl DeleteCard {
    /// Create a new DeleteCard operation
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteCard {
    fn verb(&self) -> &'static str {
        "delete"
    }
    fn noun(&self) -> &'static str {
        "card"
    }
    fn description(&self) -> &'static str {
        "Delete a card"
    }
}

impl Execute<BoardContext, BoardError> for DeleteCard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some(card) = ctx.remove_card(&self.id) else {
            return Ok(json!({ "changed": false }));
        };

        for attachment in &card.attachments {
            ctx.urls_mut().release(&attachment.url);
        }
        ctx.mark_changed();

        debug!(card = %card.id, "deleted card");
        Ok(json!({ "changed": true }))
    }
}
