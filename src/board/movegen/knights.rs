use once_cell::sync::Lazy;

use super::super::grid::Board;
use super::super::{Color, Move, Position, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

fn step_table(offsets: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// On-board knight targets for every square
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_table(&KNIGHT_OFFSETS));

/// On-board king targets for every square
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_table(&KING_OFFSETS));

impl<B: Board> Position<B> {
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        targets: &[Square],
        moves: &mut Vec<Move>,
    ) {
        for &to in targets {
            if self.can_land_on(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, color, &KNIGHT_TARGETS[from.index()], moves);
    }

    pub(crate) fn generate_king_steps(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, color, &KING_TARGETS[from.index()], moves);
    }
}
