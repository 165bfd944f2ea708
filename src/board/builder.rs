//! Fluent builder for configuring a [`Position`].
//!
//! Chooses the board storage and the initial FEN before anything is loaded,
//! so every position it produces has passed the same validation as
//! [`Position::from_fen`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Mailbox, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .board(Mailbox::empty())
//!     .fen("k7/8/8/8/8/8/8/K7 w - - 0 1")
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "k7/8/8/8/8/8/8/K7 w - - 0 1");
//! ```

use super::error::Error;
use super::grid::{Board, Mailbox};
use super::state::{Position, STARTING_FEN};

#[derive(Clone, Debug)]
pub struct PositionBuilder<B: Board = Mailbox> {
    board: B,
    fen: Option<String>,
}

impl Default for PositionBuilder<Mailbox> {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder<Mailbox> {
    /// Builder for the standard starting position on a [`Mailbox`].
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Mailbox::empty(),
            fen: None,
        }
    }
}

impl<B: Board> PositionBuilder<B> {
    /// Use `board` as the square storage. It is overwritten when the
    /// position is loaded and must be 8 squares wide.
    #[must_use]
    pub fn board<C: Board>(self, board: C) -> PositionBuilder<C> {
        PositionBuilder {
            board,
            fen: self.fen,
        }
    }

    /// Start from `fen` instead of the standard starting position.
    #[must_use]
    pub fn fen(mut self, fen: impl Into<String>) -> Self {
        self.fen = Some(fen.into());
        self
    }

    /// Validate the configuration and load the position.
    pub fn build(self) -> Result<Position<B>, Error> {
        let fen = self.fen.as_deref().unwrap_or(STARTING_FEN);
        Position::from_fen_on(self.board, fen)
    }
}
