//! Thread-safe sharing of a single position.
//!
//! Legality checks mutate the position temporarily (play, probe, take back),
//! so anything that generates legal moves needs exclusive access even though
//! it leaves the position unchanged.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{
    Board, Color, FenError, Mailbox, Move, MoveParseError, PieceCode, Position, SquareError,
    Status,
};

/// A position shared between threads.
///
/// Clones refer to the same position. Read-only queries run concurrently;
/// move generation, commits and undos are serialized.
#[derive(Debug)]
pub struct SharedPosition<B: Board = Mailbox>(Arc<RwLock<Position<B>>>);

impl<B: Board> Clone for SharedPosition<B> {
    fn clone(&self) -> Self {
        SharedPosition(Arc::clone(&self.0))
    }
}

impl SharedPosition<Mailbox> {
    /// Share the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Position::new())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from)
    }
}

impl Default for SharedPosition<Mailbox> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> From<Position<B>> for SharedPosition<B> {
    fn from(position: Position<B>) -> Self {
        SharedPosition(Arc::new(RwLock::new(position)))
    }
}

impl<B: Board> SharedPosition<B> {
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.0.read().to_fen()
    }

    pub fn piece_on(&self, name: &str) -> Result<PieceCode, SquareError> {
        self.0.read().piece_on(name)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.0.read().side_to_move()
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.0.read().is_check()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.0.write().legal_moves()
    }

    pub fn available_moves(&self) -> Option<Vec<Move>> {
        self.0.write().available_moves()
    }

    pub fn status(&self) -> Status {
        self.0.write().status()
    }

    pub fn make_move(&self, mv: Move) -> Result<(), MoveParseError> {
        self.0.write().make_move(mv)
    }

    pub fn make_move_uci(&self, uci: &str) -> Result<Move, MoveParseError> {
        self.0.write().make_move_uci(uci)
    }

    pub fn undo(&self) -> Option<Move> {
        self.0.write().undo()
    }

    pub fn load_fen(&self, fen: &str) -> Result<(), FenError> {
        self.0.write().load_fen(fen)
    }

    /// Run `f` with shared access to the position.
    pub fn with<R>(&self, f: impl FnOnce(&Position<B>) -> R) -> R {
        f(&self.0.read())
    }

    /// Run `f` with exclusive access to the position.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Position<B>) -> R) -> R {
        f(&mut self.0.write())
    }
}
