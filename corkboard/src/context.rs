//! BoardContext - in-memory state primitives for the board engine
//!
//! The context owns the authoritative collections and utilities. No business
//! logic methods, just data access primitives. Operations do all the work.

use crate::defaults;
use crate::error::{BoardError, Result};
use crate::object_url::ObjectUrlRegistry;
use crate::roster::UserRoster;
use crate::types::{Board, BoardId, Card, CardId, Column, ColumnId};

/// Observer invoked after every state-changing operation (the re-render
/// trigger). Registered callbacks live as long as the context.
type ChangeObserver = Box<dyn FnMut()>;

/// Context passed to every operation - provides access, not logic.
///
/// Exclusively owned by the single UI thread; all mutation goes through
/// `&mut` so no locking discipline is needed.
pub struct BoardContext {
    boards: Vec<Board>,
    columns: Vec<Column>,
    cards: Vec<Card>,
    active_board: Option<BoardId>,
    roster: UserRoster,
    urls: ObjectUrlRegistry,
    observers: Vec<ChangeObserver>,
}

impl BoardContext {
    /// Create a context with no data at all
    pub fn empty() -> Self {
        Self {
            boards: Vec::new(),
            columns: Vec::new(),
            cards: Vec::new(),
            active_board: None,
            roster: UserRoster::new(),
            urls: ObjectUrlRegistry::new(),
            observers: Vec::new(),
        }
    }

    /// Create a context holding the hard-coded seed set, with board "1"
    /// active
    pub fn seeded() -> Self {
        let mut ctx = Self::empty();
        ctx.boards = defaults::seed_boards();
        ctx.columns = defaults::seed_columns();
        ctx.cards = defaults::seed_cards();
        ctx.roster = UserRoster::from_users(defaults::seed_users());
        ctx.active_board = ctx.boards.first().map(|b| b.id.clone());
        ctx
    }

    // =========================================================================
    // Boards
    // =========================================================================

    /// Every board, in creation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Find a board by id
    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    /// Append a board
    pub fn insert_board(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Remove a board by id, returning it if present
    pub fn remove_board(&mut self, id: &BoardId) -> Option<Board> {
        let index = self.boards.iter().position(|b| &b.id == id)?;
        Some(self.boards.remove(index))
    }

    /// The currently active board, if any
    pub fn active_board(&self) -> Option<&BoardId> {
        self.active_board.as_ref()
    }

    /// Make a board active. Fails if the id references no board.
    pub fn select_board(&mut self, id: &BoardId) -> Result<()> {
        if self.find_board(id).is_none() {
            return Err(BoardError::unknown_board(id.as_str()));
        }
        self.active_board = Some(id.clone());
        Ok(())
    }

    pub(crate) fn set_active_board(&mut self, id: Option<BoardId>) {
        self.active_board = id;
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Every column across all boards
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The columns visible on a board, in creation order
    pub fn columns_of(&self, board: &BoardId) -> Vec<&Column> {
        self.columns.iter().filter(|c| &c.board == board).collect()
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Append a column
    pub fn insert_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Remove a column by id, returning it if present
    pub fn remove_column(&mut self, id: &ColumnId) -> Option<Column> {
        let index = self.columns.iter().position(|c| &c.id == id)?;
        Some(self.columns.remove(index))
    }

    /// Remove every column belonging to a board, returning them
    pub fn remove_columns_of(&mut self, board: &BoardId) -> Vec<Column> {
        let (removed, kept): (Vec<Column>, Vec<Column>) = std::mem::take(&mut self.columns)
            .into_iter()
            .partition(|c| &c.board == board);
        self.columns = kept;
        removed
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Every card across all boards
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards in a column, in creation order
    pub fn cards_in(&self, column: &ColumnId) -> Vec<&Card> {
        self.cards.iter().filter(|c| &c.column == column).collect()
    }

    /// The cards stamped with a board
    pub fn cards_of(&self, board: &BoardId) -> Vec<&Card> {
        self.cards.iter().filter(|c| &c.board == board).collect()
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Find a card by id (mutable)
    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Append a card
    pub fn insert_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card by id, returning it if present
    pub fn remove_card(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| &c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Remove every card in a column, returning them
    pub fn remove_cards_in(&mut self, column: &ColumnId) -> Vec<Card> {
        let (removed, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut self.cards)
            .into_iter()
            .partition(|c| &c.column == column);
        self.cards = kept;
        removed
    }

    /// Remove every card stamped with a board, returning them
    pub fn remove_cards_of(&mut self, board: &BoardId) -> Vec<Card> {
        let (removed, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut self.cards)
            .into_iter()
            .partition(|c| &c.board == board);
        self.cards = kept;
        removed
    }

    // =========================================================================
    // Shared resources
    // =========================================================================

    /// The shared user roster
    pub fn roster(&self) -> &UserRoster {
        &self.roster
    }

    /// The shared user roster (mutable)
    pub fn roster_mut(&mut self) -> &mut UserRoster {
        &mut self.roster
    }

    /// The session object URL registry
    pub fn urls(&self) -> &ObjectUrlRegistry {
        &self.urls
    }

    /// The session object URL registry (mutable)
    pub fn urls_mut(&mut self) -> &mut ObjectUrlRegistry {
        &mut self.urls
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback fired after every state-changing operation
    pub fn observe(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Notify observers that state changed. Called by operations exactly
    /// once per effective mutation, never on no-ops.
    pub(crate) fn mark_changed(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}

impl std::fmt::Debug for BoardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardContext")
            .field("boards", &self.boards.len())
            .field("columns", &self.columns.len())
            .field("cards", &self.cards.len())
            .field("active_board", &self.active_board)
            .field("users", &self.roster.len())
            .field("live_urls", &self.urls.live_count())
            .field("observers", &self.observers.len())
            .finish()
    }
}
