//! GetCard operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::CardId;
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};

/// Fetch one card by id. Unknown ids yield `null` rather than an error.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetCard {
    /// The card ID to fetch
    pub id: CardId,
}

impl GetCard {
    /// Create a new GetCard operation
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for GetCard {
    fn verb(&self) -> &'static str {
        "get"
    }
    fn noun(&self) -> &'static str {
        "card"
    }
    fn description(&self) -> &'static str {
        "Fetch a single card"
    }
}

impl Execute<BoardContext, BoardError> for GetCard {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        match ctx.find_card(&self.id) {
            Some(card) => Ok(serde_json::to_value(card)?),
            None => Ok(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_card() {
        let mut ctx = BoardContext::seeded();

        let result = GetCard::new("2").execute(&mut ctx).unwrap();

        assert_eq!(result["title"], "Task 2");
        assert_eq!(result["column"], "inProgress");
    }

    #[test]
    fn test_get_unknown_card_is_null() {
        let mut ctx = BoardContext::seeded();

        let result = GetCard::new("ghost").execute(&mut ctx).unwrap();

        assert!(result.is_null());
    }
}
