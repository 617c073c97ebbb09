//! DeleteBoard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::BoardId;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// Delete a board, cascading to its columns and cards.
///
/// Attachment URLs owned by cascaded cards are released. An unknown id
/// leaves the store unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBoard {
    /// The board ID to delete
    pub id: BoardId,
}

impl DeleteBoard {
    /// Create a new DeleteBoard operation
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteBoard {
    fn verb(&self) -> &'static str {
        "delete"
    }
    fn noun(&self) -> &'static str {
        "board"
    }
    fn description(&self) -> &'static str {
        "Delete a board and everything on it"
    }
}

impl Execute<BoardContext, BoardError> for DeleteBoard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some(board) = ctx.remove_board(&self.id) else {
            return Ok(json!({ "changed": false }));
        };

        let columns = ctx.remove_columns_of(&board.id);
        let cards = ctx.remove_cards_of(&board.id);
        for card in &cards {
            for attachment in &card.attachments {
                ctx.urls_mut().release(&attachment.url);
            }
        }

        // Deleting the active board falls back to the first remaining one
        if ctx.active_board() == Some(&board.id) {
            let next = ctx.boards().first().map(|b| b.id.clone());
            ctx.set_active_board(next);
        }
        ctx.mark_changed();

        info!(
            board = %board.id,
            columns = columns.len(),
            cards = cards.len(),
            "deleted board"
        );
        Ok(json!({
            "changed": true,
            "cascaded_columns": columns.len(),
            "cascaded_cards": cards.len(),
        }))
    }
}
