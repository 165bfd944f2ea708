use super::super::grid::Board;
use super::super::{Color, Move, Position, Square, PROMOTION_PIECES};

/// Push a plain move, or one move per promotion piece when `to` is the last rank.
fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl<B: Board> Position<B> {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                push_pawn_move(from, forward, color, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            match self.board.get(target).color() {
                Some(owner) if owner != color => push_pawn_move(from, target, color, moves),
                Some(_) => {}
                None if Some(target) == self.en_passant_target => {
                    moves.push(Move::new(from, target));
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str, from: &str) -> Vec<String> {
        let position = Position::from_fen(fen).unwrap();
        let from: Square = from.parse().unwrap();
        let color = position.piece_at(from).color().unwrap();
        let mut moves = Vec::new();
        position.generate_pawn_moves(from, color, &mut moves);
        let mut names: Vec<String> = moves.iter().map(ToString::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_single_and_double_push() {
        assert_eq!(
            pawn_moves(crate::board::STARTING_FEN, "e2"),
            vec!["e2e3", "e2e4"]
        );
        assert_eq!(
            pawn_moves(crate::board::STARTING_FEN, "d7"),
            vec!["d7d5", "d7d6"]
        );
    }

    #[test]
    fn test_double_push_blocked_by_intervening_piece() {
        let moves = pawn_moves("k7/8/8/8/8/4n3/4P3/K7 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn test_double_push_blocked_on_target() {
        let moves = pawn_moves("k7/8/8/8/4n3/8/4P3/K7 w - - 0 1", "e2");
        assert_eq!(moves, vec!["e2e3"]);
    }

    #[test]
    fn test_captures_and_en_passant() {
        let moves = pawn_moves("7k/8/8/3pPp2/8/8/8/7K w - f6 0 1", "e5");
        assert_eq!(moves, vec!["e5e6", "e5f6"]);
    }

    #[test]
    fn test_promotion_with_capture() {
        let moves = pawn_moves("k6r/6P1/8/8/8/8/8/K7 w - - 0 1", "g7");
        assert_eq!(
            moves,
            vec![
                "g7g8b", "g7g8n", "g7g8q", "g7g8r", "g7h8b", "g7h8n", "g7h8q", "g7h8r"
            ]
        );
    }

    #[test]
    fn test_black_promotion() {
        let moves = pawn_moves("k7/8/8/8/8/8/p7/2K5 b - - 0 1", "a2");
        assert_eq!(moves, vec!["a2a1b", "a2a1n", "a2a1q", "a2a1r"]);
    }
}
