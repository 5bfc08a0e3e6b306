use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Where the game stands for the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Classify from "in check" and "has a legal move".
    #[must_use]
    pub const fn from_flags(in_check: bool, has_move: bool) -> Self {
        match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Playing,
        }
    }

    /// Checkmate and stalemate end the game
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Whether the side to move's king square should be highlighted
    #[inline]
    #[must_use]
    pub const fn highlights_king(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Position {
    /// Status of `color` in this position.
    #[must_use]
    pub fn status_for(&self, color: Color) -> GameStatus {
        let in_check = self.board.is_in_check(color);
        GameStatus::from_flags(in_check, self.has_valid_move(color))
    }

    /// Status of the side to move; a pure function of board and turn.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status_for(self.turn)
    }

    /// The winner once the side to move has been mated.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        (self.status() == GameStatus::Checkmate).then(|| self.turn.opponent())
    }
}
