//! Property-based tests using proptest.
//!
//! Each case replays a random game from the start position, choosing moves
//! with a seeded RNG, and checks rules that must hold after every ply.

use crate::board::{Color, GameStatus, Move, Piece, Position, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=16usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, calling `check` before each one
/// with the position and the chosen move.
fn random_playout<F>(seed: u64, num_moves: usize, mut check: F) -> Position
where
    F: FnMut(&Position, Move) -> Result<(), TestCaseError>,
{
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = pos.all_valid_moves(pos.turn());
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        if let Err(e) = check(&pos, mv) {
            panic!("{e}");
        }
        pos.play(mv);
    }
    pos
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_moves_never_expose_own_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |pos, mv| {
            let mover = pos.turn();
            let mut next = pos.clone();
            prop_assert!(next.play(mv).is_some());
            prop_assert!(!next.board().is_in_check(mover), "{} exposed the king", mv);
            Ok(())
        });
    }

    /// Property: asking about legality never changes the position
    #[test]
    fn prop_validity_queries_are_pure(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_, _| Ok(()));
        let before = pos.clone();
        let _ = pos.all_valid_moves(Color::White);
        let _ = pos.all_valid_moves(Color::Black);
        let _ = pos.status();
        prop_assert_eq!(pos, before);
    }

    /// Property: a move empties its source square and fills its destination
    /// with a piece of the mover's color
    #[test]
    fn prop_move_relocates_piece(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |pos, mv| {
            let mover = pos.turn();
            let mut next = pos.clone();
            next.play(mv);
            prop_assert_eq!(next.piece_at(mv.from), None);
            prop_assert!(next.piece_at(mv.to).is_some_and(|p| p.color == mover));
            prop_assert_eq!(next.turn(), mover.opponent());
            Ok(())
        });
    }

    /// Property: the en passant target only survives one half-move and only
    /// after a pawn double step
    #[test]
    fn prop_en_passant_target_lives_one_ply(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |pos, mv| {
            let mut next = pos.clone();
            let record = next.play(mv);
            prop_assert!(record.is_some());
            let record = record.unwrap();
            let double_step = record.piece == Piece::Pawn
                && mv.from.rank().abs_diff(mv.to.rank()) == 2;
            if double_step {
                let skipped = Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file());
                prop_assert_eq!(next.en_passant_target(), Some(skipped));
            } else {
                prop_assert_eq!(next.en_passant_target(), None);
            }
            Ok(())
        });
    }

    /// Property: status agrees with its definition in terms of check and
    /// available moves
    #[test]
    fn prop_status_matches_definition(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_, _| Ok(()));
        let side = pos.turn();
        let in_check = pos.board().is_in_check(side);
        let has_move = !pos.all_valid_moves(side).is_empty();
        let expected = match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Playing,
        };
        prop_assert_eq!(pos.status(), expected);
    }

    /// Property: FEN export re-imports to the same FEN
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves, |_, _| Ok(()));
        let fen = pos.to_fen();
        let reparsed = Position::try_from_fen(&fen);
        prop_assert!(reparsed.is_ok(), "{} did not parse", fen);
        prop_assert_eq!(reparsed.unwrap().to_fen(), fen);
    }
}
