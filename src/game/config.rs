//! Session configuration and board orientation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Square};

/// Which side is drawn at the bottom of the view.
///
/// View cells are (col, row) with row 0 at the top, as a renderer lays
/// them out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Orientation {
    /// Orientation with `color` at the bottom
    #[must_use]
    pub const fn facing(color: Color) -> Self {
        match color {
            Color::White => Orientation::WhiteBottom,
            Color::Black => Orientation::BlackBottom,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::WhiteBottom => Orientation::BlackBottom,
            Orientation::BlackBottom => Orientation::WhiteBottom,
        }
    }

    /// Board square under a view cell, `None` off the board.
    #[must_use]
    pub fn view_to_square(self, col: usize, row: usize) -> Option<Square> {
        if col >= 8 || row >= 8 {
            return None;
        }
        let sq = Square(7 - row, col);
        match self {
            Orientation::WhiteBottom => Some(sq),
            Orientation::BlackBottom => sq.rotate(),
        }
    }

    /// View cell (col, row) where `sq` is drawn, `None` off the board.
    #[must_use]
    pub fn square_to_view(self, sq: Square) -> Option<(usize, usize)> {
        let sq = match self {
            Orientation::WhiteBottom => Some(sq).filter(|s| s.is_in_bounds()),
            Orientation::BlackBottom => sq.rotate(),
        }?;
        Some((sq.file(), 7 - sq.rank()))
    }
}

/// Options for a game session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Orientation at the start of a game
    pub orientation: Orientation,
    /// Turn the board toward the side to move after every move
    pub auto_flip: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn with_auto_flip(mut self, auto_flip: bool) -> Self {
        self.auto_flip = auto_flip;
        self
    }

    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}
