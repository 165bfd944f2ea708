//! King-safety filter and terminal-state detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::movegen::destination_match;
use super::{Color, Move, Position};

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl<B: Board> Position<B> {
    /// Whether `color`'s king is a destination of the opponent's pseudo-legal moves.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let replies = self.pseudo_legal_moves_for(color.opponent());
        destination_match(&replies, self.king_square(color))
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Test a pseudo-legal move for king safety.
    ///
    /// The move is played in place, the opponent's replies are generated and
    /// the move is taken back. Castling additionally requires that the king is
    /// not in check and that the square it crosses is not a reply destination.
    /// The in-check refusal is an addition to the destination test and follows
    /// the standard castling rule.
    pub(crate) fn is_legal_pseudo_move(&mut self, mv: Move) -> bool {
        let mover = self.side_to_move;
        let king_way = self.castling_king_way(mv);
        if king_way.is_some() && self.is_in_check(mover) {
            return false;
        }

        self.simulate(mv, |after| {
            let replies = after.pseudo_legal_moves();
            let king_attacked = destination_match(&replies, after.king_square(mover));
            let way_attacked = king_way.is_some_and(|sq| destination_match(&replies, sq));
            !king_attacked && !way_attacked
        })
    }

    /// Whether `mv` can be played in the current position.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        self.pseudo_legal_moves().contains(&mv) && self.is_legal_pseudo_move(mv)
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|&mv| self.is_legal_pseudo_move(mv));
        moves
    }

    /// Legal moves, or `None` when the side to move is checkmated.
    ///
    /// A stalemate yields `Some` with an empty list.
    pub fn available_moves(&mut self) -> Option<Vec<Move>> {
        let moves = self.legal_moves();
        if moves.is_empty() && self.is_check() {
            return None;
        }
        Some(moves)
    }

    pub fn status(&mut self) -> Status {
        let no_moves = self.legal_moves().is_empty();
        match (no_moves, self.is_check()) {
            (true, true) => Status::Checkmate,
            (true, false) => Status::Stalemate,
            (false, true) => Status::Check,
            (false, false) => Status::Ongoing,
        }
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == Status::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == Status::Stalemate
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move_unchecked(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
