//! Error types for board operations.

use std::fmt;

use super::Color;

/// Broad category of a [`FenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenErrorKind {
    /// Wrong field or rank counts, malformed rank expansion
    Structural,
    /// Bad color, castling, en passant or clock field
    Field,
    /// Well-formed text describing an impossible position
    IllegalPosition,
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly 6 space-separated fields
    WrongFieldCount { found: usize },
    /// Placement must have exactly 8 '/'-separated ranks
    WrongRankCount { found: usize },
    /// Unrecognized character in the placement field
    InvalidPiece { rank: usize, char: char },
    /// A rank does not expand to exactly 8 squares
    BadRankLength { rank: usize, squares: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field is not '-' or a set of distinct `KQkq` letters
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a non-negative integer
    InvalidFullmoveNumber { found: String },
    /// A color does not have exactly one king
    KingCount { color: Color, found: usize },
    /// The side to move could capture the opponent king
    OpponentInCheck,
}

impl FenError {
    #[must_use]
    pub fn kind(&self) -> FenErrorKind {
        match self {
            FenError::WrongFieldCount { .. }
            | FenError::WrongRankCount { .. }
            | FenError::InvalidPiece { .. }
            | FenError::BadRankLength { .. } => FenErrorKind::Structural,
            FenError::InvalidSideToMove { .. }
            | FenError::InvalidCastling { .. }
            | FenError::InvalidEnPassant { .. }
            | FenError::InvalidHalfmoveClock { .. }
            | FenError::InvalidFullmoveNumber { .. } => FenErrorKind::Field,
            FenError::KingCount { .. } | FenError::OpponentInCheck => {
                FenErrorKind::IllegalPosition
            }
        }
    }
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { rank, char } => {
                write!(f, "Invalid piece character '{char}' in rank {rank}")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::OpponentInCheck => {
                write!(f, "The side to move can capture the opponent king")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a two-character square name
    InvalidNotation { notation: String },
    /// File or rank outside 0..8
    OutOfBounds { file: i16, rank: i16 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::OutOfBounds { file, rank } => {
                write!(f, "Coordinate ({file}, {rank}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board capabilities the engine cannot drive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Only 8x8 boards are supported
    UnsupportedWidth { width: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnsupportedWidth { width } => {
                write!(f, "Board width {width} is not supported, expected 8")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Any error produced by the crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Fen(FenError),
    Move(MoveParseError),
    Square(SquareError),
    Board(BoardError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fen(err) => write!(f, "invalid FEN: {err}"),
            Error::Move(err) => write!(f, "invalid move: {err}"),
            Error::Square(err) => write!(f, "invalid square: {err}"),
            Error::Board(err) => write!(f, "invalid board: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fen(err) => Some(err),
            Error::Move(err) => Some(err),
            Error::Square(err) => Some(err),
            Error::Board(err) => Some(err),
        }
    }
}

impl From<FenError> for Error {
    fn from(err: FenError) -> Self {
        Error::Fen(err)
    }
}

impl From<MoveParseError> for Error {
    fn from(err: MoveParseError) -> Self {
        Error::Move(err)
    }
}

impl From<SquareError> for Error {
    fn from(err: SquareError) -> Self {
        Error::Square(err)
    }
}

impl From<BoardError> for Error {
    fn from(err: BoardError) -> Self {
        Error::Board(err)
    }
}
