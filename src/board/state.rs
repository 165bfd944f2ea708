use super::error::{BoardError, SquareError};
use super::grid::{Board, Mailbox};
use super::history::HistoryEntry;
use super::{CastlingRights, Color, Piece, PieceCode, Square, BOARD_WIDTH};

/// Standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board plus the rules context needed to play on it.
///
/// The king squares are a cache of the board content; every operation that
/// moves a king updates them in the same call.
#[derive(Clone, Debug)]
pub struct Position<B: Board = Mailbox> {
    pub(crate) board: B,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) kings: [Square; 2],
    pub(crate) history: Vec<HistoryEntry>,
}

impl Position<Mailbox> {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Mailbox::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [Square::at(4, 7), Square::at(4, 0)],
            history: Vec::new(),
        }
    }
}

impl Default for Position<Mailbox> {
    fn default() -> Self {
        Position::new()
    }
}

impl<B: Board> Position<B> {
    /// Rejects boards the rules engine cannot address.
    pub(crate) fn check_board(board: &B) -> Result<(), BoardError> {
        let width = board.width();
        if width != BOARD_WIDTH as usize {
            return Err(BoardError::UnsupportedWidth { width });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Moves committed since the position was loaded, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> PieceCode {
        self.board.get(sq)
    }

    /// Piece on an algebraic square such as `"e4"`.
    pub fn piece_on(&self, name: &str) -> Result<PieceCode, SquareError> {
        let sq: Square = name.parse()?;
        Ok(self.board.get(sq))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.board.get(sq).is_empty()
    }

    /// Scan the board for each color's king.
    pub(crate) fn count_kings(board: &B) -> ([usize; 2], [Option<Square>; 2]) {
        let mut counts = [0; 2];
        let mut squares = [None; 2];
        for sq in Square::all() {
            if let Some((color, Piece::King)) = board.get(sq).split() {
                counts[color.index()] += 1;
                squares[color.index()] = Some(sq);
            }
        }
        (counts, squares)
    }

    /// Revoke every right whose king or rook no longer stands on its home square.
    ///
    /// Rights are only ever removed here, never granted.
    pub(crate) fn recompute_castling_rights(&mut self) {
        for color in Color::BOTH {
            let rank = color.back_rank();
            let king_home = self.board.get(Square::at(4, rank)).is(color, Piece::King);
            for (kingside, rook_file) in [(true, 7), (false, 0)] {
                let rook_home = self.board.get(Square::at(rook_file, rank)).is(color, Piece::Rook);
                if !(king_home && rook_home) {
                    self.castling_rights.remove(color, kingside);
                }
            }
        }
    }
}
