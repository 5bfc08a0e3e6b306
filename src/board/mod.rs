//! Chess board representation and rules.
//!
//! A mailbox 8x8 board with full move legality: piece geometry, path
//! obstruction, check avoidance, castling, en passant, queen promotion and
//! checkmate/stalemate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStatus, Move, Position};
//!
//! let mut position = Position::new();
//! assert_eq!(position.all_valid_moves(Color::White).len(), 20);
//!
//! let record = position.play("e2e4".parse::<Move>().unwrap()).unwrap();
//! assert!(!record.is_capture());
//! assert_eq!(position.turn(), Color::Black);
//! assert_eq!(position.status(), GameStatus::Playing);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod geometry;
mod legality;
mod make_move;
mod perft;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use state::{Board, Position};
pub use status::GameStatus;
pub use types::{CastleSide, Color, Move, MoveRecord, Piece, PlacedPiece, Square};
