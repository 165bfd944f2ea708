//! Move type and long-algebraic (UCI) notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceCode};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another, with an optional promotion piece.
///
/// The wire form is 4 characters (`e2e4`) or 5 with a lowercase
/// promotion letter (`e7e8q`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Rank distance travelled, ignoring direction
    #[inline]
    #[must_use]
    pub(crate) const fn rank_distance(self) -> u8 {
        self.from.rank().abs_diff(self.to.rank())
    }

    #[inline]
    #[must_use]
    pub(crate) const fn file_distance(self) -> u8 {
        self.from.file().abs_diff(self.to.file())
    }
}

/// Format a move in long algebraic notation.
///
/// The promotion code may carry either color; only its piece type is written,
/// always in lowercase.
#[must_use]
pub fn format_move(from: Square, to: Square, promotion: Option<PieceCode>) -> String {
    match promotion.and_then(PieceCode::piece) {
        Some(piece) => Move::new_promotion(from, to, piece).to_string(),
        None => Move::new(from, to).to_string(),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Syntactic parse only; legality is checked by `Position::parse_move`.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if !(4..=5).contains(&len) || s.len() != len {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight))
                    if c.is_ascii_lowercase() =>
                {
                    Ok(Move::new_promotion(from, to, piece))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Color;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_display_plain_and_promotion() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
        assert_eq!(
            Move::new_promotion(sq("e7"), sq("e8"), Piece::Queen).to_string(),
            "e7e8q"
        );
    }

    #[test]
    fn test_format_move_strips_color() {
        let white_knight = PieceCode::new(Color::White, Piece::Knight);
        assert_eq!(format_move(sq("b7"), sq("b8"), Some(white_knight)), "b7b8n");
        assert_eq!(format_move(sq("b7"), sq("b8"), None), "b7b8");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            "d3d9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "h7h8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(matches!(
            "h7h8Q".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'Q' })
        ));
    }

    #[test]
    fn test_parse_promotion() {
        let mv: Move = "a7a8n".parse().unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.from(), sq("a7"));
    }
}
