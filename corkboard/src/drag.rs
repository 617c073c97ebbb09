//! Drag reassignment protocol
//!
//! Models the platform drag lifecycle as an explicit state machine: drag
//! start attaches the card id as the transfer payload, a column arms itself
//! as the drop target by accepting the drag-over (the analogue of
//! suppressing the platform's default rejection), and finishing the session
//! over an armed target issues the same `MoveCard` that direct column
//! assignment uses. Releasing outside any target is a no-op.

use tracing::debug;

use crate::card::MoveCard;
use crate::context::BoardContext;
use crate::error::Result;
use crate::types::{CardId, ColumnId};
use corkboard_operations::Execute;

/// Outcome of finishing a drag session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload was delivered to an armed target. `changed` is false
    /// when the card was already in that column (or either id was unknown).
    Dropped {
        card: CardId,
        column: ColumnId,
        changed: bool,
    },
    /// Released outside any accepting target; the protocol never fired
    NoTarget,
}

/// One drag interaction, from drag start to release
#[derive(Debug)]
pub struct DragSession {
    payload: CardId,
    target: Option<ColumnId>,
}

impl DragSession {
    /// Start dragging a card. The id is the transferred payload; nothing
    /// is validated here - an unknown card simply ends in a no-op move.
    pub fn start(card: impl Into<CardId>) -> Self {
        Self {
            payload: card.into(),
            target: None,
        }
    }

    /// The transferred card id
    pub fn payload(&self) -> &CardId {
        &self.payload
    }

    /// A column accepts the drag-over, arming itself as the drop target
    pub fn drag_over(&mut self, column: impl Into<ColumnId>) {
        self.target = Some(column.into());
    }

    /// The drag left the armed target without dropping
    pub fn leave(&mut self) {
        self.target = None;
    }

    /// Release the drag, consuming the session. Over an armed target this
    /// issues `MoveCard(payload, target)`; otherwise nothing happens.
    pub fn finish(self, ctx: &mut BoardContext) -> Result<DropOutcome> {
        let Some(column) = self.target else {
            debug!(card = %self.payload, "drag released outside any target");
            return Ok(DropOutcome::NoTarget);
        };

        let result = MoveCard::new(self.payload.clone(), column.clone()).execute(ctx)?;
        Ok(DropOutcome::Dropped {
            card: self.payload,
            column,
            changed: result["changed"].as_bool().unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_on_column_moves_card() {
        let mut ctx = BoardContext::seeded();
        let mut session = DragSession::start("1");
        session.drag_over("done");

        let outcome = session.finish(&mut ctx).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                card: CardId::from("1"),
                column: ColumnId::from("done"),
                changed: true,
            }
        );
        assert_eq!(
            ctx.find_card(&CardId::from("1")).unwrap().column.as_str(),
            "done"
        );
    }

    #[test]
    fn test_drop_outside_any_target_is_noop() {
        let mut ctx = BoardContext::seeded();
        let session = DragSession::start("1");

        let outcome = session.finish(&mut ctx).unwrap();

        assert_eq!(outcome, DropOutcome::NoTarget);
        assert_eq!(
            ctx.find_card(&CardId::from("1")).unwrap().column.as_str(),
            "todo"
        );
    }

    #[test]
    fn test_leaving_target_disarms_it() {
        let mut ctx = BoardContext::seeded();
        let mut session = DragSession::start("1");
        session.drag_over("done");
        session.leave();

        assert_eq!(session.finish(&mut ctx).unwrap(), DropOutcome::NoTarget);
    }

    #[test]
    fn test_drop_on_current_column_is_valid_noop() {
        let mut ctx = BoardContext::seeded();
        let mut session = DragSession::start("1");
        session.drag_over("todo");

        let outcome = session.finish(&mut ctx).unwrap();

        assert!(matches!(
            outcome,
            DropOutcome::Dropped { changed: false, .. }
        ));
    }

    #[test]
    fn test_later_drag_over_wins() {
        let mut ctx = BoardContext::seeded();
        let mut session = DragSession::start("2");
        session.drag_over("todo");
        session.drag_over("review");

        session.finish(&mut ctx).unwrap();

        assert_eq!(
            ctx.find_card(&CardId::from("2")).unwrap().column.as_str(),
            "review"
        );
    }
}
