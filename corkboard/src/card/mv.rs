//! MoveCard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{CardId, ColumnId};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Reassign a card to a different column.
///
/// Only column membership is modeled - there is no position within a
/// column. Moving a card to the column it already occupies is a valid
/// no-op. When the target column belongs to a different board the card's
/// board stamp follows it, keeping the card-column-board invariant true.
#[derive(Debug, Serialize, Deserialize)]
pub struct MoveCard {
    /// The card ID to move
    pub id: CardId,
    /// The target column
    pub column: ColumnId,
}

impl MoveCard {
    /// Create a new MoveCard operation
    pub fn new(id: impl Into<CardId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
        }
    }
}

impl Operation for MoveCard {
    fn verb(&self) -> &'static str {
        "move"
    }
    fn noun(&self) -> &'static str {
        "card"
    }
    fn description(&self) -> &'static str {
        "Move a card to a different column"
    }
}

impl Execute<BoardContext, BoardError> for MoveCard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some(target) = ctx.find_column(&self.column) else {
            return Ok(json!({ "changed": false }));
        };
        let target_board = target.board.clone();

        let Some(card) = ctx.find_card_mut(&self.id) else {
            return Ok(json!({ "changed": false }));
        };

        if card.column == self.column {
            // Already there - idempotent
            return Ok(json!({
                "changed": false,
                "card": serde_json::to_value(&*card)?,
            }));
        }

        card.column = self.column.clone();
        card.board = target_board;
        let card = card.clone();
        ctx.mark_changed();

        debug!(card = %card.id, column = %card.column, "moved card");
        Ok(json!({ "changed": true, "card": serde_json::to_value(&card)? }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_card_changes_only_column() {
        let mut ctx = BoardContext::seeded();
        let before = ctx.find_card(&CardId::from("1")).unwrap().clone();

        let result = MoveCard::new("1", "done").execute(&mut ctx).unwrap();

        assert_eq!(result["changed"], true);
        let after = ctx.find_card(&CardId::from("1")).unwrap();
        assert_eq!(after.column.as_str(), "done");
        // Everything but the column is untouched
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.labels, before.labels);
        assert_eq!(after.assignees, before.assignees);
        assert_eq!(after.attachments, before.attachments);

        // All other cards keep their original columns
        for id in ["2", "3", "4"] {
            let card = ctx.find_card(&CardId::from(id)).unwrap();
            let original = crate::defaults::seed_cards()
                .into_iter()
                .find(|c| c.id == card.id)
                .unwrap();
            assert_eq!(card, &original);
        }
    }

    #[test]
    fn test_move_to_current_column_is_noop() {
        let mut ctx = BoardContext::seeded();

        let result = MoveCard::new("1", "todo").execute(&mut ctx).unwrap();

        assert_eq!(result["changed"], false);
        assert_eq!(
            ctx.find_card(&CardId::from("1")).unwrap().column.as_str(),
            "todo"
        );
    }

    #[test]
    fn test_move_unknown_card_is_noop() {
        let mut ctx = BoardContext::seeded();

        let result = MoveCard::new("ghost", "done").execute(&mut ctx).unwrap();

        assert_eq!(result["changed"], false);
    }

    #[test]
    fn test_move_to_unknown_column_is_noop() {
        let mut ctx = BoardContext::seeded();

        let result = MoveCard::new("1", "ghost").execute(&mut ctx).unwrap();

        assert_eq!(result["changed"], false);
        assert_eq!(
            ctx.find_card(&CardId::from("1")).unwrap().column.as_str(),
            "todo"
        );
    }

    #[test]
    fn test_move_across_boards_restamps_board() {
        let mut ctx = BoardContext::seeded();
        ctx.select_board(&crate::types::BoardId::from("2")).unwrap();
        let inbox = crate::column::AddColumn::new("Inbox")
            .execute(&mut ctx)
            .unwrap();
        let inbox_id = inbox["column"]["id"].as_str().unwrap().to_string();

        MoveCard::new("1", inbox_id.as_str()).execute(&mut ctx).unwrap();

        let card = ctx.find_card(&CardId::from("1")).unwrap();
        assert_eq!(card.column.as_str(), inbox_id);
        assert_eq!(card.board.as_str(), "2");
    }
}
