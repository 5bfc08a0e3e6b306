//! Attack and check detection.
//!
//! Built on the geometry predicates only. Nothing here looks at castling or
//! check-safety, so `legality` can call into it without recursion.

use super::geometry::deltas;
use super::{Board, Color, Piece, PlacedPiece, Square};

impl Board {
    /// Would any piece of `by` reach `target` on the current board?
    ///
    /// Pawns attack their two forward diagonals whether or not anything stands
    /// there, and never straight ahead. Kings attack adjacent squares only.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        if !target.is_in_bounds() {
            return false;
        }
        self.pieces_of(by)
            .any(|(from, attacker)| self.attacks(from, attacker, target))
    }

    fn attacks(&self, from: Square, attacker: PlacedPiece, target: Square) -> bool {
        if from == target {
            return false;
        }
        match attacker.piece {
            Piece::Pawn => {
                let (dr, df) = deltas(from, target);
                dr == attacker.color.pawn_direction() && df.abs() == 1
            }
            Piece::Rook => self.is_valid_rook_move(from, target),
            Piece::Bishop => self.is_valid_bishop_move(from, target),
            Piece::Queen => self.is_valid_queen_move(from, target),
            Piece::Knight => self.is_valid_knight_move(from, target),
            Piece::King => self.is_king_step(from, target),
        }
    }

    /// Square of `color`'s king, or `None` if the board has none.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// A side with no king on the board is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
