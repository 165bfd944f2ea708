use std::fmt;
use std::str::FromStr;

use super::error::{Error, FenError, MoveParseError};
use super::grid::{Board, Mailbox};
use super::{CastlingRights, Color, Move, Piece, PieceCode, Position, Square, BOARD_WIDTH};

const FEN_FIELDS: usize = 6;

/// Parse and fully validate a FEN record into a fresh mailbox position.
///
/// Nothing is shared with any existing position, so a failure at any stage
/// leaves callers untouched.
fn parse_fen(fen: &str) -> Result<Position<Mailbox>, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != FEN_FIELDS {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let board = parse_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling_rights = fields[2]
        .parse::<CastlingRights>()
        .map_err(|_| FenError::InvalidCastling {
            found: fields[2].to_string(),
        })?;

    let (counts, squares) = Position::count_kings(&board);
    let mut kings = [Square::at(0, 0); 2];
    for color in Color::BOTH {
        match (counts[color.index()], squares[color.index()]) {
            (1, Some(sq)) => kings[color.index()] = sq,
            (found, _) => return Err(FenError::KingCount { color, found }),
        }
    }

    let en_passant_target = parse_en_passant(&board, fields[3])?;

    let halfmove_clock =
        parse_counter(fields[4]).ok_or_else(|| FenError::InvalidHalfmoveClock {
            found: fields[4].to_string(),
        })?;
    let fullmove_number =
        parse_counter(fields[5]).ok_or_else(|| FenError::InvalidFullmoveNumber {
            found: fields[5].to_string(),
        })?;

    let position = Position {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        kings,
        history: Vec::new(),
    };

    if position.is_in_check(side_to_move.opponent()) {
        return Err(FenError::OpponentInCheck);
    }

    Ok(position)
}

/// Plain decimal digits without a sign or leading zeros, so the value
/// serializes back to the same text.
fn parse_counter(field: &str) -> Option<u32> {
    let digits_only = !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (field.len() > 1 && field.starts_with('0')) {
        return None;
    }
    field.parse().ok()
}

fn parse_placement(field: &str) -> Result<Mailbox, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != BOARD_WIDTH as usize {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Mailbox::empty();
    for (rank, text) in ranks.iter().enumerate() {
        let mut squares = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                squares += run as usize;
                continue;
            }
            let piece =
                PieceCode::from_fen_char(c).ok_or(FenError::InvalidPiece { rank, char: c })?;
            if squares < BOARD_WIDTH as usize {
                board.set(Square::at(squares as u8, rank as u8), piece);
            }
            squares += 1;
        }
        if squares != BOARD_WIDTH as usize {
            return Err(FenError::BadRankLength { rank, squares });
        }
    }
    Ok(board)
}

/// An en passant target must sit on the third or sixth rank, directly in
/// front of a pawn of the color that just double-pushed. The target and the
/// pawn's origin square must both be empty.
fn parse_en_passant(board: &Mailbox, field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;

    let pusher = match target.rank() {
        2 => Color::Black,
        5 => Color::White,
        _ => return Err(invalid()),
    };
    let pawn_square = target
        .offset(0, pusher.pawn_direction())
        .ok_or_else(invalid)?;
    let origin = target
        .offset(0, -pusher.pawn_direction())
        .ok_or_else(invalid)?;
    if !board.get(pawn_square).is(pusher, Piece::Pawn)
        || !board.get(target).is_empty()
        || !board.get(origin).is_empty()
    {
        return Err(invalid());
    }
    Ok(Some(target))
}

impl Position<Mailbox> {
    /// Load a position from a FEN record.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let position = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    /// assert_eq!(position.halfmove_clock(), 0);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = parse_fen(fen);
        match &position {
            Ok(_) => crate::debug_log!("loaded position {fen}"),
            Err(_e) => crate::debug_log!("rejected FEN {fen:?}: {_e}"),
        }
        position
    }
}

impl<B: Board> Position<B> {
    /// Load a FEN record onto a caller-supplied board.
    ///
    /// Fails with [`Error::Board`] when the board is not 8 squares wide.
    pub fn from_fen_on(mut board: B, fen: &str) -> Result<Self, Error> {
        Self::check_board(&board)?;
        let parsed = Position::<Mailbox>::from_fen(fen)?;
        copy_squares(&parsed.board, &mut board);
        Ok(Position {
            board,
            side_to_move: parsed.side_to_move,
            castling_rights: parsed.castling_rights,
            en_passant_target: parsed.en_passant_target,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
            kings: parsed.kings,
            history: Vec::new(),
        })
    }

    /// Replace the whole state with a FEN record and clear the history.
    ///
    /// On error nothing is modified.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parsed = Position::<Mailbox>::from_fen(fen)?;
        copy_squares(&parsed.board, &mut self.board);
        self.side_to_move = parsed.side_to_move;
        self.castling_rights = parsed.castling_rights;
        self.en_passant_target = parsed.en_passant_target;
        self.halfmove_clock = parsed.halfmove_clock;
        self.fullmove_number = parsed.fullmove_number;
        self.kings = parsed.kings;
        self.history.clear();
        Ok(())
    }

    /// Serialize the position as a six-field FEN record.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..BOARD_WIDTH {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..BOARD_WIDTH {
                match self.board.get(Square::at(file, rank)).to_fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in long algebraic notation (e.g. "e2e4", "e7e8q") and
    /// check it against the legal moves of the current position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv: Move = uci.parse()?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
        }
    }

    /// Parse a move and commit it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.make_move_uci("e2e4").unwrap();
    /// position.make_move_uci("e7e5").unwrap();
    /// assert_eq!(position.fullmove_number(), 2);
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv)?;
        Ok(mv)
    }
}

fn copy_squares<B: Board>(from: &Mailbox, to: &mut B) {
    for sq in Square::all() {
        to.set(sq, from.get(sq));
    }
}

impl FromStr for Position<Mailbox> {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl<B: Board> fmt::Display for Position<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::{BoardError, FenErrorKind};
    use crate::board::STARTING_FEN;

    fn load_err(fen: &str) -> FenError {
        Position::from_fen(fen).unwrap_err()
    }

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            STARTING_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "8/8/8/8/8/8/8/K1k5 b - - 42 117",
        ] {
            assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_castling_letters_serialize_canonically() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").unwrap();
        assert_eq!(position.castling_rights().to_string(), "KQkq");
    }

    #[test]
    fn test_extra_whitespace_between_fields() {
        let position = Position::from_fen("  8/8/8/8/8/8/8/K1k5   w -  - 0 1 ").unwrap();
        assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/K1k5 w - - 0 1");
    }

    #[test]
    fn test_field_count() {
        assert_eq!(
            load_err("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
            FenError::WrongFieldCount { found: 5 }
        );
        assert_eq!(
            load_err("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 x"),
            FenError::WrongFieldCount { found: 7 }
        );
    }

    #[test]
    fn test_rank_count() {
        assert_eq!(
            load_err("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            FenError::WrongRankCount { found: 7 }
        );
    }

    #[test]
    fn test_invalid_piece() {
        let err = load_err("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(err, FenError::InvalidPiece { rank: 1, char: 'x' });
        assert_eq!(err.kind(), FenErrorKind::Structural);
        assert!(matches!(
            load_err("rnbqkbnr/pppppppp/8/8/9/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            FenError::InvalidPiece { char: '9', .. }
        ));
    }

    #[test]
    fn test_bad_rank_length() {
        assert_eq!(
            load_err("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            FenError::BadRankLength { rank: 1, squares: 7 }
        );
        assert_eq!(
            load_err("rnbqkbnr/pppppppp/8/8/44/8/PPPPPPPP/RNBQKBNR1 w KQkq - 0 1"),
            FenError::BadRankLength { rank: 7, squares: 9 }
        );
    }

    #[test]
    fn test_field_errors() {
        let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        assert!(matches!(
            load_err(&format!("{base} x KQkq - 0 1")),
            FenError::InvalidSideToMove { .. }
        ));
        assert!(matches!(
            load_err(&format!("{base} w KKq - 0 1")),
            FenError::InvalidCastling { .. }
        ));
        assert!(matches!(
            load_err(&format!("{base} w XQkq - 0 1")),
            FenError::InvalidCastling { .. }
        ));
        assert!(matches!(
            load_err(&format!("{base} w KQkq z9 0 1")),
            FenError::InvalidEnPassant { .. }
        ));
        assert!(matches!(
            load_err(&format!("{base} w KQkq - -1 1")),
            FenError::InvalidHalfmoveClock { .. }
        ));
        let err = load_err(&format!("{base} w KQkq - 0 one"));
        assert!(matches!(err, FenError::InvalidFullmoveNumber { .. }));
        assert_eq!(err.kind(), FenErrorKind::Field);
    }

    #[test]
    fn test_en_passant_requires_pawn() {
        assert!(matches!(
            load_err("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1"),
            FenError::InvalidEnPassant { .. }
        ));
        assert!(matches!(
            load_err("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e4 0 1"),
            FenError::InvalidEnPassant { .. }
        ));
    }

    #[test]
    fn test_en_passant_squares_must_be_empty() {
        // Knight on the target square.
        assert_eq!(
            load_err("7k/8/3n4/3pP3/8/8/8/7K w - d6 0 1"),
            FenError::InvalidEnPassant { found: "d6".into() }
        );
        // Piece on the pushed pawn's origin square.
        assert_eq!(
            load_err("7k/3n4/8/3pP3/8/8/8/7K w - d6 0 1"),
            FenError::InvalidEnPassant { found: "d6".into() }
        );
        let position = Position::from_fen("7k/8/8/3pP3/8/8/8/7K w - d6 0 1").unwrap();
        assert_eq!(position.en_passant_target().map(|sq| sq.to_string()), Some("d6".into()));
    }

    #[test]
    fn test_counters_are_plain_digits() {
        let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";
        assert_eq!(
            load_err(&format!("{base} +5 1")),
            FenError::InvalidHalfmoveClock { found: "+5".into() }
        );
        assert_eq!(
            load_err(&format!("{base} 0 +1")),
            FenError::InvalidFullmoveNumber { found: "+1".into() }
        );
        assert_eq!(
            load_err(&format!("{base} 07 1")),
            FenError::InvalidHalfmoveClock { found: "07".into() }
        );
        let fen = format!("{base} 10 12");
        let position = Position::from_fen(&fen).unwrap();
        assert_eq!(position.halfmove_clock(), 10);
        assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn test_king_count() {
        let err = load_err("8/8/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(
            err,
            FenError::KingCount {
                color: Color::Black,
                found: 0
            }
        );
        assert_eq!(err.kind(), FenErrorKind::IllegalPosition);
        assert_eq!(
            load_err("k7/8/8/8/8/8/8/K6K w - - 0 1"),
            FenError::KingCount {
                color: Color::White,
                found: 2
            }
        );
    }

    #[test]
    fn test_side_to_move_can_capture_king() {
        assert_eq!(
            load_err("k7/8/8/8/8/8/8/R6K w - - 0 1"),
            FenError::OpponentInCheck
        );
        // Same placement is fine when the checked side is to move.
        assert!(Position::from_fen("k7/8/8/8/8/8/8/R6K b - - 0 1").is_ok());
    }

    #[test]
    fn test_load_fen_is_atomic() {
        let mut position = Position::new();
        position.make_move_uci("e2e4").unwrap();
        let before = position.to_fen();
        assert!(position.load_fen("8/8/8/8/8/8/8/K7 w - - 0 1").is_err());
        assert_eq!(position.to_fen(), before);
        assert_eq!(position.history().len(), 1);

        position.load_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(position.history().is_empty());
        assert_eq!(position.king_square(Color::Black).to_string(), "c1");
    }

    #[test]
    fn test_from_fen_on_custom_board() {
        let position =
            Position::from_fen_on(Mailbox::starting_position(), "8/8/8/8/8/8/8/K1k5 w - - 0 1")
                .unwrap();
        assert!(position.piece_on("e2").unwrap().is_empty());
        assert_eq!(
            position.piece_on("a1").unwrap(),
            PieceCode::new(Color::White, Piece::King)
        );
    }

    #[derive(Debug)]
    struct Tiny;

    impl Board for Tiny {
        fn get(&self, _sq: Square) -> PieceCode {
            PieceCode::EMPTY
        }
        fn set(&mut self, _sq: Square, _piece: PieceCode) {}
        fn width(&self) -> usize {
            4
        }
    }

    #[test]
    fn test_from_fen_on_rejects_width() {
        let err = Position::from_fen_on(Tiny, STARTING_FEN).unwrap_err();
        assert_eq!(err, Error::Board(BoardError::UnsupportedWidth { width: 4 }));
    }

    #[test]
    fn test_parse_move() {
        let mut position = Position::new();
        let mv = position.parse_move("e2e4").unwrap();
        assert_eq!(mv.from().to_string(), "e2");
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            position.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = position.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        assert!(matches!(
            position.parse_move("a7a8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(matches!(
            position.parse_move("a7a8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_from_str_and_display() {
        let position: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(position.to_string(), STARTING_FEN);
    }
}
