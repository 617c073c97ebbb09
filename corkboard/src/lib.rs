//! In-memory kanban board engine
//!
//! This crate provides the state core of a kanban board UI: boards, columns,
//! cards, labels, assignees, and attachments, held in an exclusively-owned
//! in-memory context with a synchronous mutation surface.
//!
//! ## Overview
//!
//! - **Operations are structs** - every mutation is a command
//!   (`AddCard`, `MoveCard`, ...) executed against the [`BoardContext`]
//! - **Silent no-ops** - empty titles and unknown ids leave the store
//!   unchanged rather than failing
//! - **Staged editing** - [`CardEditor`] buffers edits to one card and
//!   touches the store at most once, on commit
//! - **Explicit resources** - attachment URLs are session-scoped handles
//!   with caller-owned release, tracked by the
//!   [`ObjectUrlRegistry`](object_url::ObjectUrlRegistry)
//!
//! ## Basic Usage
//!
//! ```rust
//! use corkboard::{card::{AddCard, MoveCard}, BoardContext, Execute};
//!
//! # fn main() -> Result<(), corkboard::BoardError> {
//! // Every fresh session starts from the hard-coded seed set
//! let mut ctx = BoardContext::seeded();
//!
//! let result = AddCard::new("todo", "Buy milk")
//!     .with_description("2%")
//!     .execute(&mut ctx)?;
//! let id = result["card"]["id"].as_str().unwrap_or_default().to_string();
//!
//! // Drag-and-drop terminates in the same operation
//! MoveCard::new(id, "done").execute(&mut ctx)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Lifecycle
//!
//! All entities are created by appending to an in-memory sequence, mutated
//! by replacement keyed by id, and destroyed by filtering out of that
//! sequence. Nothing survives the session; every fresh context resets to
//! the seed set.

mod context;
mod error;
mod roster;

pub mod defaults;
pub mod drag;
pub mod editor;
pub mod object_url;
pub mod types;

// Operation modules
pub mod board;
pub mod card;
pub mod column;
pub mod user;

// Re-export the operation layer
pub use corkboard_operations::{Execute, LogEntry, Operation, OperationProcessor, Value};

pub use context::BoardContext;
pub use drag::{DragSession, DropOutcome};
pub use editor::{CardEditor, StagedFile};
pub use error::{BoardError, Result};
pub use object_url::{ObjectUrl, ObjectUrlRegistry};
pub use roster::UserRoster;

// Re-export commonly used types
pub use types::{
    Attachment, AttachmentId, Board, BoardId, Card, CardId, Column, ColumnId, Label, User, UserId,
};
