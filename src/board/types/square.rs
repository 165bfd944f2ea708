//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Board edge length.
pub const BOARD_WIDTH: u8 = 8;

/// A square on the board as `(file, rank)`.
///
/// `file` runs 0..8 from a to h. `rank` follows FEN order: rank 0 is the
/// eighth rank and rank 7 is the first, so `Square::new(4, 7)` is e1.
/// Serialized as a `[file, rank]` pair, bounds-checked on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a new square with bounds checking
    pub fn new(file: u8, rank: u8) -> Result<Self, SquareError> {
        if file >= BOARD_WIDTH || rank >= BOARD_WIDTH {
            return Err(SquareError::OutOfBounds {
                file: i16::from(file),
                rank: i16::from(rank),
            });
        }
        Ok(Square { file, rank })
    }

    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        debug_assert!(file < BOARD_WIDTH && rank < BOARD_WIDTH);
        Square { file, rank }
    }

    /// Build from signed coordinates, `None` when off the board
    #[inline]
    #[must_use]
    pub fn checked(file: i16, rank: i16) -> Option<Self> {
        let width = i16::from(BOARD_WIDTH);
        if (0..width).contains(&file) && (0..width).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Step by a `(file, rank)` delta, `None` when it leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Square::checked(
            i16::from(self.file) + i16::from(df),
            i16::from(self.rank) + i16::from(dr),
        )
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank index in FEN order (0 = eighth rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// All 64 squares in FEN traversal order (a8, b8, ..., h1)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_WIDTH).flat_map(|rank| (0..BOARD_WIDTH).map(move |file| Square { file, rank }))
    }

    /// Index 0..64 in FEN traversal order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * BOARD_WIDTH as usize + self.file as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square {
            file: (idx % BOARD_WIDTH as usize) as u8,
            rank: (idx / BOARD_WIDTH as usize) as u8,
        }
    }

    /// Two-character algebraic name, e.g. "e4"
    #[must_use]
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

/// Algebraic name for raw coordinates; `None` when out of bounds.
#[must_use]
pub fn to_algebraic(file: i16, rank: i16) -> Option<String> {
    Square::checked(file, rank).map(Square::to_algebraic)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            BOARD_WIDTH - self.rank
        )
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.file, sq.rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if s.chars().count() != 2 || bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = i16::from(bytes[0]) - i16::from(b'a');
        let rank = i16::from(BOARD_WIDTH) - (i16::from(bytes[1]) - i16::from(b'0'));
        Square::checked(file, rank).ok_or(SquareError::OutOfBounds { file, rank })
    }
}
