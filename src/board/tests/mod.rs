//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Piece movement and path obstruction
//! - `check_safety.rs` - Pins, checks and king safety
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `game_end.rs` - Check, checkmate and stalemate classification
//! - `perft.rs` - Node counts on reference positions
//! - `proptest.rs` - Property-based tests over random games

mod check_safety;
mod perft;
mod proptest;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square in test")
}
