//! Piece, color and packed piece-code types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// The 3-bit type field used inside a [`PieceCode`] (1..=6).
    #[inline]
    #[must_use]
    pub(crate) const fn code(self) -> u8 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight => 2,
            Piece::Bishop => 3,
            Piece::Rook => 4,
            Piece::Queen => 5,
            Piece::King => 6,
        }
    }

    const fn from_code(code: u8) -> Option<Piece> {
        match code {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a character, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Promotion choices in generation order (queen first)
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank index for this color (7 for White, 0 for Black).
    ///
    /// Rank indices follow FEN order: index 0 is the eighth rank.
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward direction in rank indices (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting rank index (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Pawn promotion rank index (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// FEN active-color letter
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

const TYPE_MASK: u8 = 0b0111;
const BLACK_FLAG: u8 = 0b1000;

/// Packed square content: a 3-bit piece type plus a black flag bit.
///
/// Zero is the empty square. Only the 13 values produced by [`PieceCode::new`]
/// and [`PieceCode::EMPTY`] are constructible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PieceCode(u8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        let flag = match color {
            Color::White => 0,
            Color::Black => BLACK_FLAG,
        };
        PieceCode(piece.code() | flag)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Piece type with the color bit stripped
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        Piece::from_code(self.0 & TYPE_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.0 == 0 {
            None
        } else if self.0 & BLACK_FLAG != 0 {
            Some(Color::Black)
        } else {
            Some(Color::White)
        }
    }

    /// Both halves at once, `None` for an empty square
    #[inline]
    #[must_use]
    pub fn split(self) -> Option<(Color, Piece)> {
        Some((self.color()?, self.piece()?))
    }

    #[inline]
    #[must_use]
    pub fn is(self, color: Color, piece: Piece) -> bool {
        self == PieceCode::new(color, piece)
    }

    #[inline]
    #[must_use]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Map a FEN placement letter (case carries color) to a code
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(PieceCode::new(color, piece))
    }

    #[must_use]
    pub fn to_fen_char(self) -> Option<char> {
        self.split().map(|(color, piece)| piece.to_fen_char(color))
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PieceCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == 0 {
            return Ok(PieceCode::EMPTY);
        }
        if value & !(TYPE_MASK | BLACK_FLAG) != 0 || Piece::from_code(value & TYPE_MASK).is_none() {
            return Err(value);
        }
        Ok(PieceCode(value))
    }
}

impl From<PieceCode> for u8 {
    fn from(code: PieceCode) -> u8 {
        code.0
    }
}

impl fmt::Debug for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fen_char() {
            Some(c) => write!(f, "PieceCode({c})"),
            None => write!(f, "PieceCode(empty)"),
        }
    }
}
