//! FEN import and export.
//!
//! The engine tracks "has moved" per piece rather than castling rights, so the
//! castling field is translated both ways: a right leaves the king and that
//! rook unmoved on their home squares, and every other king or rook is marked
//! as moved. Move clocks are not tracked; export writes `0 1`.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, Color, Piece, PlacedPiece, Position, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = parse_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights: Vec<(Color, CastleSide)> = Vec::new();
        for c in parts[2].chars() {
            match c {
                'K' => rights.push((Color::White, CastleSide::Kingside)),
                'Q' => rights.push((Color::White, CastleSide::Queenside)),
                'k' => rights.push((Color::Black, CastleSide::Kingside)),
                'q' => rights.push((Color::Black, CastleSide::Queenside)),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            s => {
                let invalid = || FenError::InvalidEnPassant {
                    found: s.to_string(),
                };
                let target = s.parse::<Square>().map_err(|_| invalid())?;
                // The skipped square sits behind the opponent's double-stepped pawn.
                let expected_rank = turn.opponent().pawn_start_rank() as isize
                    + turn.opponent().pawn_direction();
                if target.rank() as isize != expected_rank {
                    return Err(invalid());
                }
                Some(target)
            }
        };

        for color in Color::BOTH {
            let kings = board
                .pieces_of(color)
                .filter(|(_, p)| p.piece == Piece::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount {
                    color: if color == Color::White { "White" } else { "Black" },
                    found: kings,
                });
            }
        }

        infer_moved_flags(&mut board, &rights);
        Ok(Position::from_parts(board, turn, en_passant))
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.board.get(Square(rank, file)) {
                    Some(p) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(p.piece.to_fen_char(p.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if has_castling_pieces(&self.board, color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {side} {castling} {ep} 0 1", rows.join("/"))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set(Square(rank, file), Some(PlacedPiece::new(piece, color)));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(board)
}

fn infer_moved_flags(board: &mut Board, rights: &[(Color, CastleSide)]) {
    let occupied: Vec<(Square, PlacedPiece)> = board.pieces().collect();
    for (sq, mut placed) in occupied {
        let home = placed.color.back_rank();
        placed.has_moved = match placed.piece {
            Piece::King => {
                sq != Square(home, 4) || !rights.iter().any(|(c, _)| *c == placed.color)
            }
            Piece::Rook => !rights.iter().any(|&(c, side)| {
                c == placed.color && sq == Square(home, side.rook_from_file())
            }),
            Piece::Pawn => sq.rank() != placed.color.pawn_start_rank(),
            _ => false,
        };
        board.set(sq, Some(placed));
    }
}

fn has_castling_pieces(board: &Board, color: Color, side: CastleSide) -> bool {
    let home = color.back_rank();
    let unmoved = |sq: Square, piece: Piece| {
        board
            .get(sq)
            .is_some_and(|p| p.is(piece, color) && !p.has_moved)
    };
    unmoved(Square(home, 4), Piece::King) && unmoved(Square(home, side.rook_from_file()), Piece::Rook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_fen_matches_new() {
        let parsed = Position::from_fen(STARTING_FEN);
        assert_eq!(parsed, Position::new());
        assert_eq!(Position::new().to_fen(), STARTING_FEN);
    }

    #[test]
    fn test_castling_field_drives_moved_flags() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        let flag = |s: &str| pos.piece_at(s.parse().unwrap()).unwrap().has_moved;
        assert!(!flag("e1"));
        assert!(!flag("h1"));
        assert!(flag("a1"));
        assert!(!flag("e8"));
        assert!(!flag("a8"));
        assert!(flag("h8"));
        assert_eq!(pos.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    }

    #[test]
    fn test_en_passant_field() {
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert_eq!(pos.en_passant_target(), Some(Square(5, 3)));
    }

    #[test]
    fn test_en_passant_field_must_match_side_to_move() {
        let black_to_move = Position::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1");
        assert_eq!(black_to_move.en_passant_target(), Some(Square(2, 3)));

        for fen in [
            "4k3/8/8/8/8/8/4P3/4K3 w - e3 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
        ] {
            assert!(
                matches!(
                    Position::try_from_fen(fen),
                    Err(FenError::InvalidEnPassant { .. })
                ),
                "{fen} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_fen() {
        assert_eq!(
            Position::try_from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8 w - -"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K2X w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::KingCount { found: 0, .. })
        ));
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }
}
