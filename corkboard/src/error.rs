//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// The mutation surface is mostly total: empty titles and unknown ids are
/// silently-absorbed no-ops, not errors. What remains is the genuinely
/// failable edge of the expanded engine.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board not found
    #[error("board not found: {id}")]
    UnknownBoard { id: String },

    /// No board is currently active
    #[error("no active board selected")]
    NoActiveBoard,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an unknown-board error
    pub fn unknown_board(id: impl Into<String>) -> Self {
        Self::UnknownBoard { id: id.into() }
    }
}
