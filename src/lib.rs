pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Color, GameStatus, Move, MoveRecord, Piece, PlacedPiece, Position, Square};
pub use game::{Game, GameConfig, SharedGame};
