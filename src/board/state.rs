use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PlacedPiece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (file, piece) in BACK_RANK.iter().enumerate() {
        board.set(Square(0, file), Some(PlacedPiece::new(*piece, Color::White)));
        board.set(Square(7, file), Some(PlacedPiece::new(*piece, Color::Black)));
        board.set(Square(1, file), Some(PlacedPiece::new(Piece::Pawn, Color::White)));
        board.set(Square(6, file), Some(PlacedPiece::new(Piece::Pawn, Color::Black)));
    }
    board
});

/// The 8x8 grid. Indexed `[rank][file]`; `None` is an empty square.
///
/// Only bounds are checked here; every rule lives in higher layers.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<PlacedPiece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting setup, every piece unmoved.
    #[must_use]
    pub fn starting() -> Self {
        STARTING_BOARD.clone()
    }

    #[inline]
    #[must_use]
    pub const fn is_in_bounds(&self, sq: Square) -> bool {
        sq.is_in_bounds()
    }

    /// The occupant of `sq`; off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<PlacedPiece> {
        if sq.is_in_bounds() {
            self.squares[sq.rank()][sq.file()]
        } else {
            None
        }
    }

    /// Overwrite `sq`. Writes to off-board squares are dropped.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<PlacedPiece>) {
        debug_assert!(sq.is_in_bounds(), "write to off-board square {sq:?}");
        if sq.is_in_bounds() {
            self.squares[sq.rank()][sq.file()] = occupant;
        }
    }

    /// Empty `sq`, returning what stood there.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<PlacedPiece> {
        let occupant = self.get(sq);
        if occupant.is_some() {
            self.set(sq, None);
        }
        occupant
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Every occupied square in index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.get(Square(rank, file)) {
                    Some(p) => p.piece.to_fen_char(p.color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Board plus the side to move and the en passant target.
///
/// This is the value every rule query runs against. The en passant target is
/// the square a pawn skipped on its double step; it lives for exactly one
/// half-move.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) en_passant: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            turn: Color::White,
            en_passant: None,
        }
    }

    #[must_use]
    pub fn from_parts(board: Board, turn: Color, en_passant: Option<Square>) -> Self {
        Position {
            board,
            turn,
            en_passant,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.board.get(sq)
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)?;
        if let Some(ep) = self.en_passant {
            write!(f, ", en passant on {ep}")?;
        }
        Ok(())
    }
}
