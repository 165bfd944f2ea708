//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move lists for hand-picked positions
//! - `make_unmake.rs` - Commit/undo correctness over random playouts
//! - `terminal.rs` - Check, checkmate and stalemate detection
//! - `perft.rs` - Node counts against published reference values
//! - `proptest.rs` - Property-based tests


use crate::board::Position;

/// Legal moves of `fen` in long algebraic form, sorted.
pub(super) fn legal_move_names(fen: &str) -> Vec<String> {
    let mut position = Position::from_fen(fen).unwrap();
    let mut names: Vec<String> = position
        .legal_moves()
        .iter()
        .map(|m| m.to_string())
        .collect();
    names.sort();
    names
}

pub(super) fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    names.sort();
    names
}
