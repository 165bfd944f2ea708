use super::{CastlingRights, Move, PieceCode, Square};

/// Everything `unmake_move` needs to reverse one move exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    /// Piece moved, as it stood on the origin square
    pub(crate) moved: PieceCode,
    /// Captured piece and the square it was taken from (differs from the
    /// target square for en passant)
    pub(crate) captured: Option<(Square, PieceCode)>,
    /// Rook origin and destination for castling moves
    pub(crate) castle_rook: Option<(Square, Square)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// One committed move together with the state needed to take it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) fen_before: String,
    pub(crate) unmake: UnmakeInfo,
}

impl HistoryEntry {
    #[must_use]
    pub fn played(&self) -> Move {
        self.mv
    }

    /// FEN of the position before the move was played
    #[must_use]
    pub fn fen_before(&self) -> &str {
        &self.fen_before
    }

    #[must_use]
    pub fn previous_halfmove_clock(&self) -> u32 {
        self.unmake.previous_halfmove_clock
    }

    #[must_use]
    pub fn previous_castling_rights(&self) -> CastlingRights {
        self.unmake.previous_castling_rights
    }

    /// Whether the move removed an opposing piece
    #[must_use]
    pub fn was_capture(&self) -> bool {
        self.unmake.captured.is_some()
    }
}
