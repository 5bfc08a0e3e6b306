//! Per-piece movement geometry.
//!
//! These predicates answer "can this piece kind travel from A to B" on the
//! current board. They know nothing about whose turn it is or whether the
//! mover's king ends up in check; `legality` layers that on top.

use super::{Board, CastleSide, Piece, PlacedPiece, Position, Square};

/// Both endpoints on the board.
#[inline]
fn on_board(from: Square, to: Square) -> bool {
    from.is_in_bounds() && to.is_in_bounds()
}

/// Signed (rank, file) displacement from `from` to `to`.
#[inline]
pub(crate) fn deltas(from: Square, to: Square) -> (isize, isize) {
    (
        to.rank() as isize - from.rank() as isize,
        to.file() as isize - from.file() as isize,
    )
}

impl Board {
    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Walks the unit step from `from` toward `to`, so callers must already
    /// know the two squares share a rank, file or diagonal.
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        if !on_board(from, to) {
            return false;
        }
        let (dr, df) = deltas(from, to);
        let (step_r, step_f) = (dr.signum(), df.signum());
        let mut current = from;
        loop {
            current = match current.offset(step_r, step_f) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    #[must_use]
    pub fn is_valid_rook_move(&self, from: Square, to: Square) -> bool {
        if !on_board(from, to) || (from.rank() != to.rank() && from.file() != to.file()) {
            return false;
        }
        from != to && self.is_path_clear(from, to)
    }

    #[must_use]
    pub fn is_valid_bishop_move(&self, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        if !on_board(from, to) || dr.abs() != df.abs() || dr == 0 {
            return false;
        }
        self.is_path_clear(from, to)
    }

    #[must_use]
    pub fn is_valid_queen_move(&self, from: Square, to: Square) -> bool {
        self.is_valid_rook_move(from, to) || self.is_valid_bishop_move(from, to)
    }

    #[must_use]
    pub fn is_valid_knight_move(&self, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        on_board(from, to) && matches!((dr.abs(), df.abs()), (1, 2) | (2, 1))
    }

    /// One-square king step (Chebyshev distance 1). Castling is not a step.
    #[must_use]
    pub fn is_king_step(&self, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        on_board(from, to) && dr.abs() <= 1 && df.abs() <= 1 && (dr, df) != (0, 0)
    }
}

impl Position {
    /// Pawn geometry: single push onto an empty square, double push from the
    /// start rank through two empty squares, or a one-file diagonal step onto
    /// an enemy piece or a valid en passant target.
    #[must_use]
    pub fn is_valid_pawn_move(&self, from: Square, to: Square, pawn: PlacedPiece) -> bool {
        if !on_board(from, to) {
            return false;
        }
        let dir = pawn.color.pawn_direction();
        let (dr, df) = deltas(from, to);
        let target = self.board.get(to);

        if df == 0 {
            if target.is_some() {
                return false;
            }
            if dr == dir {
                return true;
            }
            if from.rank() == pawn.color.pawn_start_rank() && dr == 2 * dir {
                return from
                    .offset(dir, 0)
                    .is_some_and(|between| self.board.is_empty(between));
            }
            return false;
        }

        if df.abs() == 1 && dr == dir {
            return match target {
                Some(victim) => victim.color != pawn.color,
                None => self.is_en_passant_valid(from, to),
            };
        }

        false
    }

    /// King geometry: an ordinary step, or a two-file slide along the rank
    /// which is a castling attempt decided by `can_castle`.
    #[must_use]
    pub fn is_valid_king_move(&self, from: Square, to: Square, king: PlacedPiece) -> bool {
        if self.board.is_king_step(from, to) {
            return true;
        }
        let (dr, df) = deltas(from, to);
        if on_board(from, to) && dr == 0 && df.abs() == 2 {
            let side = if df > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            return self.can_castle(king.color, side);
        }
        false
    }

    /// Dispatch to the geometry predicate for `mover.piece`.
    #[must_use]
    pub(crate) fn piece_geometry(&self, from: Square, to: Square, mover: PlacedPiece) -> bool {
        match mover.piece {
            Piece::Pawn => self.is_valid_pawn_move(from, to, mover),
            Piece::Rook => self.board.is_valid_rook_move(from, to),
            Piece::Bishop => self.board.is_valid_bishop_move(from, to),
            Piece::Queen => self.board.is_valid_queen_move(from, to),
            Piece::Knight => self.board.is_valid_knight_move(from, to),
            Piece::King => self.is_valid_king_move(from, to, mover),
        }
    }
}
