//! CreateUser operation

use crate::context::BoardContext;
use crate::defaults::AVATARS;
use crate::error::{BoardError, Result};
use corkboard_operations::{Execute, Operation, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Add a user to the shared roster.
///
/// The new user is visible to all cards on all boards. Names are not
/// de-duplicated; an empty avatar falls back to the first catalog entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (required, trimmed)
    pub name: String,
    /// Emoji avatar; defaults to the first catalog entry when empty
    #[serde(default)]
    pub avatar: String,
}

impl CreateUser {
    /// Create a new CreateUser operation
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

impl Operation for CreateUser {
    fn verb(&self) -> &'static str {
        "create"
    }
    fn noun(&self) -> &'static str {
        "user"
    }
    fn description(&self) -> &'static str {
        "Add a user to the shared roster"
    }
}

impl Execute<BoardContext, BoardError> for CreateUser {
    fn execute(&self, ctx: &mut BoardContext) -> Result<Value> {
        let avatar = if self.avatar.trim().is_empty() {
            AVATARS[0]
        } else {
            self.avatar.as_str()
        };

        let Some(user) = ctx.roster_mut().add(&self.name, avatar) else {
            return Ok(json!({ "changed": false }));
        };
        let user = user.clone();
        ctx.mark_changed();

        debug!(user = %user.id, "created user");
        Ok(json!({ "changed": true, "user": serde_json::to_value(&user)? }))
    }
}
