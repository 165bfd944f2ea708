//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut position = Position::new();
//! assert_eq!(position.status(), Status::Ongoing);
//! ```

pub use super::{
    Board, Color, Error, FenError, Mailbox, Move, MoveParseError, Piece, PieceCode, Position,
    PositionBuilder, Square, SquareError, Status,
};
