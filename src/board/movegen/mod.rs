//! Pseudo-legal move generation.
//!
//! Moves are geometrically valid for the piece and respect occupancy, but
//! may leave the mover's own king attacked. See `legality` for the filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::grid::Board;
use super::{Color, Move, Piece, Position, Square};

pub(crate) use sliders::{DIAGONALS, ORTHOGONALS};

impl<B: Board> Position<B> {
    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves_for(self.side_to_move)
    }

    /// All pseudo-legal moves `color` would have if it were its turn.
    #[must_use]
    pub fn pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in Square::all() {
            let Some((owner, piece)) = self.board.get(from).split() else {
                continue;
            };
            if owner == color {
                self.generate_piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &DIAGONALS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ORTHOGONALS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &ORTHOGONALS, moves);
                self.generate_sliding_moves(from, color, &DIAGONALS, moves);
            }
            Piece::King => {
                self.generate_king_steps(from, color, moves);
                self.generate_castling_moves(from, color, moves);
            }
        }
    }

    /// A target is reachable when it is empty or holds an opposing piece.
    #[inline]
    pub(crate) fn can_land_on(&self, sq: Square, color: Color) -> bool {
        match self.board.get(sq).color() {
            None => true,
            Some(owner) => owner != color,
        }
    }
}

/// Whether any move in `moves` ends on `target`.
pub(crate) fn destination_match(moves: &[Move], target: Square) -> bool {
    moves.iter().any(|m| m.to() == target)
}
