//! AddColumn operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::Column;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Add a column to the active board
#[derive(Debug, Serialize, Deserialize)]
pub struct AddColumn {
    /// The column title (required, trimmed)
    pub title: String,
}

impl AddColumn {
    /// Create a new AddColumn operation
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }
    fn noun(&self) -> &'static str {
        "column"
    }
    fn description(&self) -> &'static str {
        "Add a column to the active board"
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            return Ok(json!({ "changed": false }));
        }

        let Some(board) = ctx.active_board().cloned() else {
            return Err(BoardError::NoActiveBoard);
        };

        let column = Column::new(title, board);
        debug!(column = %column.id, board = %column.board, "added column");
        ctx.insert_column(column.clone());
        ctx.mark_changed();

        Ok(json!({ "changed": true, "column": serde_json::to_value(&column)? }))
    }
}
