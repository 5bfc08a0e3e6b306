use log::debug;

use super::geometry::deltas;
use super::{CastleSide, Move, MoveRecord, Piece, Position, Square};

impl Position {
    /// Execute `from -> to`, which the caller has already validated.
    ///
    /// Marks the mover as moved, removes an en passant victim, relocates the
    /// piece (and the rook when castling), refreshes the en passant target and
    /// promotes a pawn reaching its last rank to a queen. The turn is not
    /// switched. Returns `None` only if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let record = self.apply(from, to)?;
        debug!("move: {record}");
        if let Some(ep) = self.en_passant {
            debug!("en passant target set on {ep}");
        }
        if let Some(piece) = record.promotion {
            debug!("pawn promoted to {piece} on {}", record.to);
        }
        Some(record)
    }

    /// Validate and play `mv` for the side to move, then hand over the turn.
    pub fn play(&mut self, mv: Move) -> Option<MoveRecord> {
        if !self.is_legal_move(mv) {
            return None;
        }
        let record = self.move_piece(mv.from, mv.to)?;
        self.switch_turn();
        Some(record)
    }

    /// The execution steps without logging; also used for check simulation.
    pub(crate) fn apply(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let mut mover = self.board.get(from)?;
        let target = self.board.get(to);
        let (dr, df) = deltas(from, to);

        let castle = (mover.piece == Piece::King && dr == 0 && df.abs() == 2).then(|| {
            if df > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            }
        });
        let en_passant = target.is_none() && self.is_en_passant_valid(from, to);

        mover.has_moved = true;

        let mut captured = target.map(|p| p.piece);
        if en_passant {
            captured = self
                .board
                .take(Square(from.rank(), to.file()))
                .map(|p| p.piece);
        }

        self.board.set(to, Some(mover));
        self.board.set(from, None);

        if let Some(side) = castle {
            let rook_from = Square(from.rank(), side.rook_from_file());
            let rook_to = Square(from.rank(), side.rook_to_file());
            if let Some(mut rook) = self
                .board
                .get(rook_from)
                .filter(|p| p.is(Piece::Rook, mover.color))
            {
                rook.has_moved = true;
                self.board.set(rook_from, None);
                self.board.set(rook_to, Some(rook));
            }
        }

        self.en_passant = None;
        if mover.piece == Piece::Pawn && dr.abs() == 2 {
            self.en_passant = from.offset(dr / 2, 0);
        }

        let mut promotion = None;
        if mover.piece == Piece::Pawn && to.rank() == mover.color.pawn_promotion_rank() {
            mover.piece = Piece::PROMOTION;
            self.board.set(to, Some(mover));
            promotion = Some(Piece::PROMOTION);
        }

        Some(MoveRecord {
            from,
            to,
            piece: if promotion.is_some() {
                Piece::Pawn
            } else {
                mover.piece
            },
            color: mover.color,
            captured,
            castle,
            en_passant,
            promotion,
        })
    }
}
