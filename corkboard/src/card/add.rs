//! AddCard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{Card, ColumnId};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Add a new card to a column.
///
/// The card is stamped with the target column's board, starts with empty
/// labels/attachments/assignees, and gets a fresh ULID id.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddCard {
    /// The column to add the card to
    pub column: ColumnId,
    /// The card title (required, trimmed)
    pub title: String,
    /// Detailed card description
    pub description: Option<String>,
}

impl AddCard {
    /// Create a new AddCard operation with just a title
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Operation for AddCard {
    fn verb(&self) -> &'static str {
        "add"
    }
    fn noun(&self) -> &'static str {
        "card"
    }
    fn description(&self) -> &'static str {
        "Create a new card in a column"
    }
}

impl Execute<BoardContext, BoardError> for AddCard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            return Ok(json!({ "changed": false }));
        }
        // An unknown column leaves the store unchanged, like every other
        // dangling id on the mutation surface
        let Some(column) = ctx.find_column(&self.column) else {
            return Ok(json!({ "changed": false }));
        };
        let board = column.board.clone();

        let card = Card::new(title, self.column.clone(), board)
            .with_description(self.description.clone().unwrap_or_default());
        debug!(card = %card.id, column = %card.column, "added card");
        ctx.insert_card(card.clone());
        ctx.mark_changed();

        Ok(json!({ "changed": true, "card": serde_json::to_value(&card)? }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card() {
        let mut ctx = BoardContext::seeded();

        let result = AddCard::new("todo", "Buy milk")
            .with_description("2%")
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(result["changed"], true);
        assert_eq!(result["card"]["title"], "Buy milk");
        assert_eq!(result["card"]["description"], "2%");
        assert_eq!(result["card"]["column"], "todo");
        assert_eq!(result["card"]["board"], "1");
        assert_eq!(ctx.cards().len(), 5);

        let added = ctx.cards().last().unwrap();
        assert!(added.labels.is_empty());
        assert!(added.attachments.is_empty());
        assert!(added.assignees.is_empty());
    }

    #[test]
    fn test_add_card_empty_title_is_noop() {
        let mut ctx = BoardContext::seeded();

        for title in ["", "  ", "\n"] {
            let result = AddCard::new("todo", title).execute(&mut ctx).unwrap();
            assert_eq!(result["changed"], false);
        }
        assert_eq!(ctx.cards().len(), 4);
    }

    #[test]
    fn test_add_card_unknown_column_is_noop() {
        let mut ctx = BoardContext::seeded();

        let result = AddCard::new("ghost", "Orphan").execute(&mut ctx).unwrap();

        assert_eq!(result["changed"], false);
        assert_eq!(ctx.cards().len(), 4);
    }

    #[test]
    fn test_add_card_without_description() {
        let mut ctx = BoardContext::seeded();

        let result = AddCard::new("done", "Ship it").execute(&mut ctx).unwrap();

        assert_eq!(result["card"]["description"], "");
    }
}
