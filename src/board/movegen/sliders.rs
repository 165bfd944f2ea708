use super::super::grid::Board;
use super::super::{Color, Move, Position, Square};

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

impl<B: Board> Position<B> {
    /// Walk each ray until the edge or the first occupied square, which is
    /// included only when it holds an opposing piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                match self.board.get(to).color() {
                    None => moves.push(Move::new(from, to)),
                    Some(owner) => {
                        if owner != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
