//! Core types for the board engine

mod board;
mod card;
mod ids;
mod label;
mod user;

// Re-export all types
pub use board::{Board, Column};
pub use card::{Attachment, Card};
pub use ids::{AttachmentId, BoardId, CardId, ColumnId, UserId};
pub use label::Label;
pub use user::User;
