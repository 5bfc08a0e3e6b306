//! Core chess types.
//!
//! - `Piece`, `Color` and `PlacedPiece` - piece kinds, sides and board occupants
//! - `Square` - (rank, file) coordinate
//! - `Move`, `CastleSide` and `MoveRecord` - move requests and executed moves

mod moves;
mod piece;
mod square;

pub use moves::{CastleSide, Move, MoveRecord};
pub use piece::{Color, Piece, PlacedPiece};
pub use square::Square;
