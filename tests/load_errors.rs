use chess_rules::board::{Color, FenError, FenErrorKind, Position};

fn rejected(fen: &str) -> FenError {
    let mut position = Position::new();
    position.make_move_uci("e2e4").unwrap();
    let before = position.to_fen();
    let err = position.load_fen(fen).unwrap_err();
    assert_eq!(position.to_fen(), before, "failed load of {fen:?} changed state");
    assert_eq!(position.history().len(), 1);
    err
}

#[test]
fn structural_errors() {
    for fen in ["invalid", "8/8/8/8/8/8/8/8", "8/8/8/8/8/8/8/8 w"] {
        assert!(matches!(rejected(fen), FenError::WrongFieldCount { .. }), "{fen}");
    }

    let err = rejected("rnbqkbnr/ppppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    assert_eq!(err, FenError::BadRankLength { rank: 1, squares: 9 });
    let err = rejected("rnbqkbnr/p8/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    assert_eq!(err, FenError::BadRankLength { rank: 1, squares: 9 });
    assert_eq!(err.kind(), FenErrorKind::Structural);
}

#[test]
fn field_errors() {
    let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    assert_eq!(
        rejected(&format!("{base} o KQkq - 0 1")),
        FenError::InvalidSideToMove { found: "o".into() }
    );
    assert_eq!(
        rejected(&format!("{base} w QQQQ - 0 1")),
        FenError::InvalidCastling { found: "QQQQ".into() }
    );
    for ep in ["e3", "h7", "h9"] {
        assert_eq!(
            rejected(&format!("{base} w KQkq {ep} 0 1")),
            FenError::InvalidEnPassant { found: ep.into() }
        );
    }
    assert_eq!(
        rejected(&format!("{base} w KQkq - J 1")),
        FenError::InvalidHalfmoveClock { found: "J".into() }
    );
    assert_eq!(
        rejected(&format!("{base} w KQkq - +3 1")),
        FenError::InvalidHalfmoveClock { found: "+3".into() }
    );
    let err = rejected(&format!("{base} w KQkq - 0 Q"));
    assert_eq!(err, FenError::InvalidFullmoveNumber { found: "Q".into() });
    assert_eq!(err.kind(), FenErrorKind::Field);
}

#[test]
fn illegal_positions() {
    assert_eq!(
        rejected("rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQ1BNR b KQkq e3 0 1"),
        FenError::KingCount {
            color: Color::White,
            found: 0
        }
    );
    assert_eq!(
        rejected("rnbq1bnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1"),
        FenError::KingCount {
            color: Color::Black,
            found: 0
        }
    );
    assert_eq!(
        rejected("rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBKKBNR b KQkq e3 0 1"),
        FenError::KingCount {
            color: Color::White,
            found: 2
        }
    );
    let err = rejected("k7/8/8/8/8/8/7r/7K b - - 0 1");
    assert_eq!(err, FenError::OpponentInCheck);
    assert_eq!(err.kind(), FenErrorKind::IllegalPosition);
}

#[test]
fn en_passant_squares_must_be_empty() {
    for fen in [
        "7k/8/3n4/3pP3/8/8/8/7K w - d6 0 1",
        "7k/3b4/8/3pP3/8/8/8/7K w - d6 0 1",
        "7k/8/8/8/3Pp3/3N4/8/7K b - d3 0 1",
    ] {
        assert!(
            matches!(rejected(fen), FenError::InvalidEnPassant { .. }),
            "{fen}"
        );
    }

    let mut position = Position::from_fen("7k/8/8/8/3Pp3/8/8/7K b - d3 0 1").unwrap();
    let before = position.to_fen();
    assert!(position.legal_moves().iter().any(|m| m.to_string() == "e4d3"));
    assert_eq!(position.to_fen(), before);
}
