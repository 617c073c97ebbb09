//! ListCards operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{Card, ColumnId};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// List cards, either one column's or the whole active board's
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListCards {
    /// Column to list; defaults to every card of the active board
    pub column: Option<ColumnId>,
}

impl ListCards {
    /// Create a new ListCards operation for the active board
    pub fn new() -> Self {
        Self::default()
    }

    /// List a single column instead
    pub fn in_column(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
        }
    }
}

impl Operation for ListCards {
    fn verb(&self) -> &'static str {
        "list"
    }
    fn noun(&self) -> &'static str {
        "cards"
    }
    fn description(&self) -> &'static str {
        "List cards in a column or on the active board"
    }
}

impl Execute<BoardContext, BoardError> for ListCards {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let cards: Vec<&Card> = match &self.column {
            Some(column) => ctx.cards_in(column),
            None => match ctx.active_board() {
                Some(board) => ctx.cards_of(board),
                None => Vec::new(),
            },
        };
        Ok(json!({
            "count": cards.len(),
            "cards": serde_json::to_value(&cards)?,
        }))
    }
}
