//! # Corkboard Operations
//!
//! This crate provides the `Operation` trait for defining board operations.
//! Operations are structs where the fields ARE the parameters - no duplication.
//!
//! Every mutation of the board state runs synchronously inside a UI event
//! handler, so `Execute` is a plain synchronous trait. An
//! [`OperationProcessor`] wraps execution and records a session-scoped
//! activity feed of [`LogEntry`] records.
//!
//! ## Example
//!
//! ```ignore
//! use corkboard_operations::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! pub struct AddCard {
//!     /// The card title
//!     pub title: String,
//!     /// Optional description
//!     pub description: Option<String>,
//! }
//!
//! impl Operation for AddCard {
//!     fn verb(&self) -> &'static str { "add" }
//!     fn noun(&self) -> &'static str { "card" }
//!     fn description(&self) -> &'static str { "Create a new card" }
//! }
//!
//! impl Execute<BoardContext, BoardError> for AddCard {
//!     fn execute(&self, ctx: &mut BoardContext) -> Result<Value, BoardError> {
//!         // implementation mutates the context and returns a JSON payload
//!     }
//! }
//! ```

mod log;
mod operation;
mod processor;

pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
