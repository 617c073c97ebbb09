//! ListBoards operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// List every board
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListBoards {}

impl ListBoards {
    /// Create a new ListBoards operation
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for ListBoards {
    fn verb(&self) -> &'static str {
        "list"
    }
    fn noun(&self) -> &'static str {
        "boards"
    }
    fn description(&self) -> &'static str {
        "List all boards"
    }
}

impl Execute<BoardContext, BoardError> for ListBoards {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        Ok(json!({
            "count": ctx.boards().len(),
            "boards": serde_json::to_value(ctx.boards())?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_boards() {
        let mut ctx = BoardContext::seeded();

        let result = ListBoards::new().execute(&mut ctx).unwrap();

        assert_eq!(result["count"], 2);
        assert_eq!(result["boards"][0]["name"], "Main Board");
        assert_eq!(result["boards"][1]["id"], "2");
    }
}
