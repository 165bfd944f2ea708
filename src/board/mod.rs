//! Chess position representation and rules.
//!
//! A [`Position`] layers side to move, castling rights, en passant target and
//! clocks over any [`Board`] storage. Legal moves come from a pseudo-legal
//! generator filtered by simulating each move in place and undoing it.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Status};
//!
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves().len(), 20);
//! position.make_move_uci("f2f3").unwrap();
//! position.make_move_uci("e7e5").unwrap();
//! position.make_move_uci("g2g4").unwrap();
//! position.make_move_uci("d8h4").unwrap();
//! assert_eq!(position.status(), Status::Checkmate);
//! ```

mod builder;
mod error;
mod fen;
mod grid;
mod history;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{BoardError, Error, FenError, FenErrorKind, MoveParseError, SquareError};
pub use grid::{Board, Mailbox};
pub use history::HistoryEntry;
pub use legality::Status;
pub use state::{Position, STARTING_FEN};
pub use types::{
    format_move, to_algebraic, CastlingRights, Color, Move, Piece, PieceCode, Square, BOARD_WIDTH,
};

pub(crate) use types::PROMOTION_PIECES;
