//! Core chess types.
//!
//! - `Piece`, `Color` and the packed `PieceCode` stored on a board
//! - `Square` - (file, rank) coordinate with algebraic notation
//! - `Move` - origin, target and optional promotion
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{format_move, Move};
pub use piece::{Color, Piece, PieceCode};
pub use square::{to_algebraic, Square, BOARD_WIDTH};

pub(crate) use piece::PROMOTION_PIECES;
