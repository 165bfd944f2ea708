use super::super::grid::Board;
use super::super::{Color, Move, Piece, Position, Square};

impl<B: Board> Position<B> {
    /// Castling candidates: the right is held, the squares between king and
    /// rook are empty, and the rook still stands on its home square.
    ///
    /// Attacked squares are checked later by the legality filter.
    pub(crate) fn generate_castling_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut Vec<Move>,
    ) {
        let rank = color.back_rank();
        if from != Square::at(4, rank) {
            return;
        }

        for (kingside, rook_file, between, king_to) in
            [(true, 7, &[5u8, 6][..], 6), (false, 0, &[1u8, 2, 3][..], 2)]
        {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            if !between.iter().all(|&file| self.is_empty(Square::at(file, rank))) {
                continue;
            }
            if !self.board.get(Square::at(rook_file, rank)).is(color, Piece::Rook) {
                continue;
            }
            moves.push(Move::new(from, Square::at(king_to, rank)));
        }
    }
}
