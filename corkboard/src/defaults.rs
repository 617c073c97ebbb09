//! The hard-coded seed set
//!
//! Every fresh session starts from the same data: two boards, four columns
//! and four cards on the first board, four seed users, and the fixed avatar
//! catalog. Label kinds live in [`Label`](crate::types::Label) since the
//! catalog is closed.

use crate::types::{Board, Card, Column, User};

/// Avatar choices offered when creating a user ad hoc.
///
/// The first entry is the default when no avatar is picked.
pub const AVATARS: [&str; 10] = [
    "👨‍💻", "👩‍💼", "👨‍🚀", "👩‍🔬", "👨‍🎨", "👩‍🏫", "🧑‍💻", "👩‍🌾", "👨‍🍳", "👩‍🔧",
];

/// The two seed boards
pub fn seed_boards() -> Vec<Board> {
    vec![
        Board::with_id("1", "Main Board"),
        Board::with_id("2", "Project Alpha"),
    ]
}

/// The four seed columns, all on board "1"
pub fn seed_columns() -> Vec<Column> {
    vec![
        Column::with_id("todo", "To Do", "1"),
        Column::with_id("inProgress", "In Progress", "1"),
        Column::with_id("done", "Done", "1"),
        Column::with_id("review", "Review", "1"),
    ]
}

/// The four seed cards, one per seed column
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new("Task 1", "todo", "1")
            .with_id("1")
            .with_description("Description 1"),
        Card::new("Task 2", "inProgress", "1")
            .with_id("2")
            .with_description("Description 2"),
        Card::new("Task 3", "done", "1")
            .with_id("3")
            .with_description("Description 3"),
        Card::new("Task 4", "review", "1")
            .with_id("4")
            .with_description("Description 4"),
    ]
}

/// The four-user seed catalog
pub fn seed_users() -> Vec<User> {
    vec![
        User::with_id("1", "John Doe", "👨‍💻"),
        User::with_id("2", "Jane Smith", "👩‍💼"),
        User::with_id("3", "Bob Johnson", "👨‍🚀"),
        User::with_id("4", "Alice Brown", "👩‍🔬"),
    ]
}
