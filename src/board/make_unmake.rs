use super::error::MoveParseError;
use super::grid::Board;
use super::history::{HistoryEntry, UnmakeInfo};
use super::{Color, Move, Piece, PieceCode, Position, Square};

impl<B: Board> Position<B> {
    /// Whether `mv` is a king stepping two files along its rank.
    pub(crate) fn is_castling_move(&self, mv: Move) -> bool {
        self.board.get(mv.from()).piece() == Some(Piece::King)
            && mv.rank_distance() == 0
            && mv.file_distance() == 2
    }

    /// The square the king crosses while castling, `None` for other moves.
    pub(crate) fn castling_king_way(&self, mv: Move) -> Option<Square> {
        if !self.is_castling_move(mv) {
            return None;
        }
        Some(Square::at((mv.from().file() + mv.to().file()) / 2, mv.from().rank()))
    }

    fn is_en_passant_move(&self, mv: Move) -> bool {
        Some(mv.to()) == self.en_passant_target
            && mv.file_distance() == 1
            && self.board.get(mv.from()).piece() == Some(Piece::Pawn)
            && self.board.get(mv.to()).is_empty()
    }

    /// Apply a pseudo-legal move in place without validating it.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let moved = self.board.get(mv.from());
        debug_assert!(moved.belongs_to(color), "make_move: origin {} not ours", mv.from());

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let mut castle_rook = None;
        if let Some(king_way) = self.castling_king_way(mv) {
            let rook_file = if mv.to().file() > mv.from().file() { 7 } else { 0 };
            let rook_from = Square::at(rook_file, mv.from().rank());
            self.board.relocate(rook_from, king_way);
            castle_rook = Some((rook_from, king_way));
        }

        let captured = if self.is_en_passant_move(mv) {
            let behind = Square::at(mv.to().file(), mv.from().rank());
            let pawn = self.board.get(behind);
            self.board.set(behind, PieceCode::EMPTY);
            Some((behind, pawn))
        } else {
            let target = self.board.get(mv.to());
            (!target.is_empty()).then_some((mv.to(), target))
        };

        match mv.promotion() {
            Some(piece) => {
                self.board.set(mv.to(), PieceCode::new(color, piece));
                self.board.set(mv.from(), PieceCode::EMPTY);
            }
            None => self.board.relocate(mv.from(), mv.to()),
        }

        if moved.piece() == Some(Piece::King) {
            self.kings[color.index()] = mv.to();
        }

        self.side_to_move = color.opponent();
        if self.side_to_move == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.recompute_castling_rights();

        let pawn_move = mv.is_promotion() || moved.piece() == Some(Piece::Pawn);
        if pawn_move || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.en_passant_target = None;
        if !mv.is_promotion() && moved.piece() == Some(Piece::Pawn) && mv.rank_distance() == 2 {
            let between = (mv.from().rank() + mv.to().rank()) / 2;
            self.en_passant_target = Some(Square::at(mv.from().file(), between));
        }

        UnmakeInfo {
            moved,
            captured,
            castle_rook,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
        }
    }

    /// Exact inverse of [`Self::make_move_unchecked`].
    pub(crate) fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        self.board.set(mv.to(), PieceCode::EMPTY);
        self.board.set(mv.from(), info.moved);
        if let Some((sq, piece)) = info.captured {
            self.board.set(sq, piece);
        }
        if let Some((rook_from, rook_to)) = info.castle_rook {
            self.board.relocate(rook_to, rook_from);
        }

        if info.moved.piece() == Some(Piece::King) {
            self.kings[self.side_to_move.index()] = mv.from();
        }
    }

    /// Play `mv` in place, run `probe` on the result, then take the move back.
    ///
    /// `mv` must be pseudo-legal for the side to move.
    pub(crate) fn simulate<R>(&mut self, mv: Move, probe: impl FnOnce(&Self) -> R) -> R {
        let info = self.make_move_unchecked(mv);
        let result = probe(self);
        self.unmake_move(mv, info);
        result
    }

    /// Commit a legal move and record it in the history.
    ///
    /// Fails with [`MoveParseError::IllegalMove`] and leaves the position
    /// untouched when `mv` is not in the current legal move set.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveParseError> {
        if !self.legal_moves().contains(&mv) {
            crate::debug_log!("rejected illegal move {mv}");
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        let fen_before = self.to_fen();
        let unmake = self.make_move_unchecked(mv);
        crate::debug_log!("played {mv}, now {}", self.to_fen());
        self.history.push(HistoryEntry {
            mv,
            fen_before,
            unmake,
        });
        Ok(())
    }

    /// Take back the last committed move.
    ///
    /// Returns the move that was undone, or `None` when there is no history.
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        self.unmake_move(entry.mv, entry.unmake);
        debug_assert_eq!(self.to_fen(), entry.fen_before);
        crate::debug_log!("undid {}", entry.mv);
        Some(entry.mv)
    }
}
