//! AddBoard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::Board;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Create a new board
#[derive(Debug, Serialize, Deserialize)]
pub struct AddBoard {
    /// The board name (required, trimmed)
    pub name: String,
}

impl AddBoard {
    /// Create a new AddBoard operation
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Operation for AddBoard {
    fn verb(&self) -> &'static str {
        "add"
    }
    fn noun(&self) -> &'static str {
        "board"
    }
    fn description(&self) -> &'static str {
        "Create a new board"
    }
}

impl Execute<BoardContext, BoardError> for AddBoard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let name = self.name.trim();
        if name.is_empty() {
            return Ok(json!({ "changed": false }));
        }

        let board = Board::new(name);
        debug!(board = %board.id, "added board");
        ctx.insert_board(board.clone());
        // The first board ever created becomes active
        if ctx.active_board().is_none() {
            ctx.select_board(&board.id)?;
        }
        ctx.mark_changed();

        Ok(json!({ "changed": true, "board": serde_json::to_value(&board)? }))
    }
}
