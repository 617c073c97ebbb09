//! Column operations

mod add;
mod delete;
mod list;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use list::ListColumns;
