//! ListColumns operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::BoardId;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// List the columns visible on a board (the active board by default)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListColumns {
    /// Board to list; defaults to the active board
    pub board: Option<BoardId>,
}

impl ListColumns {
    /// Create a new ListColumns operation for the active board
    pub fn new() -> Self {
        Self::default()
    }

    /// List a specific board instead
    pub fn on_board(board: impl Into<BoardId>) -> Self {
        Self {
            board: Some(board.into()),
        }
    }
}

impl Operation for ListColumns {
    fn verb(&self) -> &'static str {
        "list"
    }
    fn noun(&self) -> &'static str {
        "columns"
    }
    fn description(&self) -> &'static str {
        "List the columns on a board"
    }
}

impl Execute<BoardContext, BoardError> for ListColumns {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let board = self.board.clone().or_else(|| ctx.active_board().cloned());
        let columns = match &board {
            Some(board) => ctx.columns_of(board),
            None => Vec::new(),
        };
        Ok(json!({
            "count": columns.len(),
            "columns": serde_json::to_value(&columns)?,
        }))
    }
}
