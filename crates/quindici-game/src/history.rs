//! Undo/redo move history.

use quindici_core::Move;

/// The applied-move history: an undo stack plus a redo stack.
///
/// The undo stack holds every move currently on the board, oldest first.
/// The redo stack is non-empty only immediately after one or more undos with
/// no intervening new move; pushing a new move clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Records a newly applied move, discarding any redoable moves.
    pub fn push(&mut self, mv: Move) {
        self.undo.push(mv);
        self.redo.clear();
    }

    /// Returns whether there is a move to undo.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns whether there is a move to redo.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Moves the most recent move onto the redo stack and returns it, or
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.undo.pop()?;
        self.redo.push(mv);
        Some(mv)
    }

    /// Moves the most recently undone move back onto the undo stack and
    /// returns it, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        let mv = self.redo.pop()?;
        self.undo.push(mv);
        Some(mv)
    }

    /// The applied moves, oldest first.
    #[must_use]
    pub fn undo_moves(&self) -> &[Move] {
        &self.undo
    }

    /// The undone moves, in stack order (the next move to redo is last).
    #[must_use]
    pub fn redo_moves(&self) -> &[Move] {
        &self.redo
    }

    /// Discards all history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Rebuilds a history from persisted stacks.
    ///
    /// `undo` is oldest first; `redo` is in stack order with the next move
    /// to redo last, matching [`Self::undo_moves`] and [`Self::redo_moves`].
    #[must_use]
    pub const fn from_parts(undo: Vec<Move>, redo: Vec<Move>) -> Self {
        Self { undo, redo }
    }
}
