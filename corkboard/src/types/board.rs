//! Board-level types: Board, Column

use super::ids::{BoardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A top-level named workspace grouping columns and cards.
///
/// The board itself is just metadata; columns and cards reference it by id
/// and are held in the context's flat collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
}

impl Board {
    /// Create a new board with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
        }
    }

    /// Reconstruct a board with a known ID (seed set)
    pub fn with_id(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named lane within a board that cards are grouped into.
///
/// Belongs to exactly one board; visibility is enforced by filtered reads
/// rather than referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub board: BoardId,
}

impl Column {
    /// Create a new column with a fresh ID
    pub fn new(title: impl Into<String>, board: impl Into<BoardId>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            board: board.into(),
        }
    }

    /// Reconstruct a column with a known ID (seed set)
    pub fn with_id(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        board: impl Into<BoardId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            board: board.into(),
        }
    }
}
