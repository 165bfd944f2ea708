//! The square-storage capability a [`Position`](super::Position) is layered on.

use super::error::SquareError;
use super::{Color, Piece, PieceCode, Square, BOARD_WIDTH};

/// Random access to the piece codes on a square grid.
///
/// Squares are bounds-checked when they are constructed, so access through a
/// [`Square`] cannot go out of range once the position has verified that
/// `width()` is 8.
pub trait Board {
    fn get(&self, sq: Square) -> PieceCode;

    fn set(&mut self, sq: Square, piece: PieceCode);

    /// Edge length of the (square) grid
    fn width(&self) -> usize;

    /// Move the content of `from` to `to`, overwriting `to` and clearing `from`.
    fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, PieceCode::EMPTY);
    }

    /// Remove every piece
    fn clear(&mut self) {
        for sq in Square::all() {
            self.set(sq, PieceCode::EMPTY);
        }
    }
}

/// Plain 8x8 array board, stored in FEN traversal order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mailbox {
    squares: [PieceCode; 64],
}

impl Mailbox {
    #[must_use]
    pub const fn empty() -> Self {
        Mailbox {
            squares: [PieceCode::EMPTY; 64],
        }
    }

    /// Board with the standard starting setup
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut board = Mailbox::empty();
        for (file, piece) in (0u8..).zip(back_rank) {
            board.set(Square::at(file, 0), PieceCode::new(Color::Black, piece));
            board.set(Square::at(file, 1), PieceCode::new(Color::Black, Piece::Pawn));
            board.set(Square::at(file, 6), PieceCode::new(Color::White, Piece::Pawn));
            board.set(Square::at(file, 7), PieceCode::new(Color::White, piece));
        }
        board
    }

    /// Raw-coordinate read for callers holding unvalidated indices
    pub fn try_get(&self, file: u8, rank: u8) -> Result<PieceCode, SquareError> {
        Square::new(file, rank).map(|sq| self.get(sq))
    }

    /// Raw-coordinate write for callers holding unvalidated indices
    pub fn try_set(&mut self, file: u8, rank: u8, piece: PieceCode) -> Result<(), SquareError> {
        let sq = Square::new(file, rank)?;
        self.set(sq, piece);
        Ok(())
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Mailbox::empty()
    }
}

impl Board for Mailbox {
    #[inline]
    fn get(&self, sq: Square) -> PieceCode {
        self.squares[sq.index()]
    }

    #[inline]
    fn set(&mut self, sq: Square, piece: PieceCode) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    fn width(&self) -> usize {
        BOARD_WIDTH as usize
    }

    fn clear(&mut self) {
        self.squares = [PieceCode::EMPTY; 64];
    }
}
