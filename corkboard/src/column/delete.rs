//! DeleteColumn operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::ColumnId;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// Delete a column and every card in it.
///
/// Cards are never orphaned: the cascade removes them and releases their
/// attachment URLs. An unknown id leaves the store unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    /// Create a new DeleteColumn operation
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteColumn {
    fn verb(&self) -> &'static str {
        "delete"
    }
    fn noun(&self) -> &'static str {
        "column"
    }
    fn description(&self) -> &'static str {
        "Delete a column and its cards"
    }
}

impl Execute<BoardContext, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some(column) = ctx.remove_column(&self.id) else {
            return Ok(json!({ "changed": false }));
        };

        let cards = ctx.remove_cards_in(&column.id);
        for card in &cards {
            for attachment in &card.attachments {
                ctx.urls_mut().release(&attachment.url);
            }
        }
        ctx.mark_changed();

        info!(column = %column.id, cards = cards.len(), "deleted column");
        Ok(json!({ "changed": true, "cascaded_cards": cards.len() }))
    }
}
