//! King safety: pins, stepping into attack, answering check.

use super::sq;
use crate::board::{Color, Move, Piece, Position, PositionBuilder, Square};

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let pos = PositionBuilder::new()
        .moved_piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Bishop)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert!(pos.valid_destinations(sq("e2")).is_empty());
    assert!(!pos.board().is_in_check(Color::White));
}

#[test]
fn test_pinned_rook_may_slide_along_the_pin() {
    let pos = PositionBuilder::new()
        .moved_piece(sq("e1"), Color::White, Piece::King)
        .moved_piece(sq("e2"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    let dests = pos.valid_destinations(sq("e2"));
    assert_eq!(
        dests,
        vec![sq("e3"), sq("e4"), sq("e5"), sq("e6"), sq("e7"), sq("e8")]
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let pos = PositionBuilder::new()
        .moved_piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("d8"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert!(!pos.is_valid_move(sq("e1"), sq("d1")));
    assert!(!pos.is_valid_move(sq("e1"), sq("d2")));
    assert!(pos.is_valid_move(sq("e1"), sq("e2")));
    assert!(pos.is_valid_move(sq("e1"), sq("f2")));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let pos = PositionBuilder::new()
        .moved_piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::Black, Piece::Queen)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert!(pos.board().is_in_check(Color::White));
    assert!(!pos.is_valid_move(sq("e1"), sq("e2")));
}

#[test]
fn test_check_must_be_answered() {
    let pos = PositionBuilder::new()
        .moved_piece(sq("e1"), Color::White, Piece::King)
        .moved_piece(sq("a2"), Color::White, Piece::Rook)
        .moved_piece(sq("h5"), Color::White, Piece::Bishop)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();
    assert!(pos.board().is_in_check(Color::White));

    let moves = pos.all_valid_moves(Color::White);
    let has = |from: &str, to: &str| moves.contains(&Move::new(sq(from), sq(to)));
    assert!(has("a2", "e2"), "block with the rook");
    assert!(has("h5", "e8"), "capture the checker");
    assert!(has("e1", "d1"));
    assert!(has("e1", "f2"));
    assert!(!has("a2", "a3"));
    assert!(!has("e1", "e2"));
    assert!(!has("h5", "g4"));
}

#[test]
fn test_validity_query_does_not_mutate() {
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    for from in Square::all() {
        for to in Square::all() {
            let _ = pos.is_valid_move(from, to);
        }
    }
    assert_eq!(pos, before);
}

#[test]
fn test_en_passant_cannot_expose_king() {
    let mut pos = PositionBuilder::new()
        .moved_piece(sq("a5"), Color::White, Piece::King)
        .moved_piece(sq("b5"), Color::White, Piece::Pawn)
        .piece(sq("c7"), Color::Black, Piece::Pawn)
        .moved_piece(sq("h5"), Color::Black, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build();
    assert!(pos.play(Move::new(sq("c7"), sq("c5"))).is_some());
    assert_eq!(pos.en_passant_target(), Some(sq("c6")));
    assert!(!pos.is_valid_move(sq("b5"), sq("c6")));
    assert!(pos.is_valid_move(sq("b5"), sq("b6")));
}
