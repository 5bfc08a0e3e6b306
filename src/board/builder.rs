//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.all_valid_moves(Color::White).len(), 7);
//! ```

use super::{Board, Color, Piece, PlacedPiece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            ..Self::new()
        }
    }

    /// Place an unmoved piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some(PlacedPiece::new(piece, color)));
        self
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some(PlacedPiece::moved(piece, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, square: Option<Square>) -> Self {
        self.en_passant_target = square;
        self
    }

    /// Build the position. No legality checks are performed.
    #[must_use]
    pub fn build(self) -> Position {
        Position::from_parts(self.board, self.side_to_move, self.en_passant_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_builder() {
        assert_eq!(PositionBuilder::starting_position().build(), Position::new());
    }

    #[test]
    fn test_clear_and_replace() {
        let pos = PositionBuilder::starting_position()
            .clear(Square(0, 6))
            .moved_piece(Square(0, 5), Color::White, Piece::Knight)
            .side_to_move(Color::Black)
            .build();
        assert_eq!(pos.piece_at(Square(0, 6)), None);
        let knight = pos.piece_at(Square(0, 5)).unwrap();
        assert!(knight.is(Piece::Knight, Color::White));
        assert!(knight.has_moved);
        assert_eq!(pos.turn(), Color::Black);
    }
}
