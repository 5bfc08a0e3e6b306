//! Move requests and records of executed moves.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A (from, to) pair. Everything else about a move is derived from the
/// position it is played in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses coordinate notation (`e2e4`). A fifth promotion character is
/// accepted and ignored, since pawns always promote to a queen.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        if let Some(c) = s[4..].chars().next() {
            if Piece::from_char(c).is_none() {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
        }
        Ok(Move { from, to })
    }
}

/// Which rook took part in a castle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    #[must_use]
    pub const fn is_kingside(self) -> bool {
        matches!(self, CastleSide::Kingside)
    }

    /// File the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_from_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_to_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Direction the king travels along the back rank
    #[inline]
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

/// What happened when a legal move was executed.
///
/// Collaborators use it for sound, logging and last-move highlights.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion: Option<Piece>,
}

impl MoveRecord {
    /// True for ordinary captures and en passant
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}{}", self.color, self.piece, self.from, self.to)?;
        if self.is_capture() {
            write!(f, " (captures)")?;
        }
        if self.en_passant {
            write!(f, " (en passant)")?;
        }
        if let Some(side) = self.castle {
            match side {
                CastleSide::Kingside => write!(f, " (castles kingside)")?,
                CastleSide::Queenside => write!(f, " (castles queenside)")?,
            }
        }
        if let Some(piece) = self.promotion {
            write!(f, " (promotes to {piece})")?;
        }
        Ok(())
    }
}
