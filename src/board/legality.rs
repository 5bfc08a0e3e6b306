//! Full legality: geometry plus king safety, castling and en passant.

use log::debug;

use super::geometry::deltas;
use super::{CastleSide, Color, Move, Piece, Position, Square};

impl Position {
    /// Is moving the piece on `from` to `to` legal?
    ///
    /// Checks run in a fixed order and stop at the first failure: bounds and
    /// null move, occupancy, king safety on a simulated copy, then the piece's
    /// geometry. Whose turn it is is not considered; see `is_legal_move`.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        if !self.board.is_in_bounds(from) || !self.board.is_in_bounds(to) || from == to {
            return false;
        }

        let Some(mover) = self.board.get(from) else {
            return false;
        };
        if self.board.get(to).is_some_and(|target| target.color == mover.color) {
            return false;
        }

        if self.would_be_in_check(from, to, mover.color) {
            return false;
        }

        self.piece_geometry(from, to, mover)
    }

    /// `is_valid_move` restricted to the side to move.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.board
            .get(mv.from)
            .is_some_and(|p| p.color == self.turn)
            && self.is_valid_move(mv.from, mv.to)
    }

    /// Play `from -> to` on a scratch copy and report whether `color`'s king
    /// is attacked afterwards. `self` is never touched.
    #[must_use]
    pub fn would_be_in_check(&self, from: Square, to: Square, color: Color) -> bool {
        let mut scratch = self.clone();
        if scratch.apply(from, to).is_none() {
            return false;
        }
        scratch.board.is_in_check(color)
    }

    /// Castling eligibility for `color` on `side`.
    ///
    /// King and rook must be on their home squares and unmoved, the king not
    /// in check, every square between them empty, and neither square the king
    /// crosses or lands on attacked.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let king_sq = Square(rank, 4);
        let rook_sq = Square(rank, side.rook_from_file());

        match self.board.get(king_sq) {
            Some(king) if king.is(Piece::King, color) && !king.has_moved => {}
            _ => {
                debug!("{color} cannot castle {side:?}: king has moved");
                return false;
            }
        }
        match self.board.get(rook_sq) {
            Some(rook) if rook.is(Piece::Rook, color) && !rook.has_moved => {}
            _ => {
                debug!("{color} cannot castle {side:?}: rook missing or moved");
                return false;
            }
        }
        if self.board.is_in_check(color) {
            debug!("{color} cannot castle {side:?}: king is in check");
            return false;
        }

        let (lo, hi) = if side.is_kingside() {
            (king_sq.file() + 1, rook_sq.file())
        } else {
            (rook_sq.file() + 1, king_sq.file())
        };
        if (lo..hi).any(|file| !self.board.is_empty(Square(rank, file))) {
            debug!("{color} cannot castle {side:?}: path blocked");
            return false;
        }

        let opponent = color.opponent();
        for distance in 1..=2 {
            let crossed = king_sq.offset(0, side.step() * distance);
            if crossed.is_some_and(|sq| self.board.is_square_attacked(sq, opponent)) {
                debug!("{color} cannot castle {side:?}: king would cross or land on an attacked square");
                return false;
            }
        }

        true
    }

    /// En passant eligibility: `to` is the live target, the mover is a pawn
    /// stepping one file diagonally forward, and an enemy pawn stands beside
    /// it on `to`'s file.
    #[must_use]
    pub fn is_en_passant_valid(&self, from: Square, to: Square) -> bool {
        if self.en_passant != Some(to) {
            return false;
        }
        let Some(pawn) = self.board.get(from).filter(|p| p.piece == Piece::Pawn) else {
            return false;
        };
        let (dr, df) = deltas(from, to);
        if df.abs() != 1 || dr != pawn.color.pawn_direction() {
            return false;
        }
        self.board
            .get(Square(from.rank(), to.file()))
            .is_some_and(|victim| victim.is(Piece::Pawn, pawn.color.opponent()))
    }

    /// Every legal destination for the piece on `from`.
    #[must_use]
    pub fn valid_destinations(&self, from: Square) -> Vec<Square> {
        if self.board.get(from).is_none() {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.is_valid_move(from, to))
            .collect()
    }

    /// Every legal move for `color`, piece by piece.
    #[must_use]
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.valid_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Short-circuiting form of `!all_valid_moves(color).is_empty()`.
    #[must_use]
    pub fn has_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| Square::all().any(|to| self.is_valid_move(from, to)))
    }
}
