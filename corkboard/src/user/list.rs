//! ListUsers operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// List the shared roster
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListUsers {}

impl ListUsers {
    /// Create a new ListUsers operation
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for ListUsers {
    fn verb(&self) -> &'static str {
        "list"
    }
    fn noun(&self) -> &'static str {
        "users"
    }
    fn description(&self) -> &'static str {
        "List every user in the shared roster"
    }
}

impl Execute<BoardContext, BoardError> for ListUsers {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        Ok(json!({
            "count": ctx.roster().len(),
            "users": serde_json::to_value(ctx.roster().users())?,
        }))
    }
}
