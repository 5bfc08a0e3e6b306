//! Game session: the boundary a renderer or input layer talks to.
//!
//! Owns the live `Position` and everything derived from it between moves:
//! cached status, the selected square, the move history and the view
//! orientation. Callers translate clicks into board squares (see
//! `Orientation::view_to_square`) before calling in.

mod config;
mod observer;
mod shared;

use std::fmt;

use log::info;

use crate::board::{Color, GameStatus, Move, MoveRecord, PlacedPiece, Position, Square};

pub use config::{GameConfig, Orientation};
pub use observer::{GameObserver, LogObserver};
pub use shared::SharedGame;

/// What a click on the board did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    /// Nothing changed (game over, or an empty/enemy square with no selection)
    Ignored,
    /// A piece of the side to move is now selected
    Selected(Square),
    /// The selection was dropped without a move
    Cleared,
    /// The selected piece moved
    Moved(MoveRecord),
}

pub struct Game {
    position: Position,
    status: GameStatus,
    selected: Option<Square>,
    history: Vec<MoveRecord>,
    config: GameConfig,
    orientation: Orientation,
    observers: Vec<Box<dyn GameObserver + Send>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.position)
            .field("status", &self.status)
            .field("selected", &self.selected)
            .field("history", &self.history.len())
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Game {
            position: Position::new(),
            status: GameStatus::Playing,
            selected: None,
            history: Vec::new(),
            config,
            orientation: config.orientation,
            observers: Vec::new(),
        }
    }

    /// Start a session from an arbitrary position.
    #[must_use]
    pub fn from_position(position: Position, config: GameConfig) -> Self {
        let mut game = Self::with_config(config);
        game.load_position(position);
        game
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver + Send>) {
        self.observers.push(observer);
    }

    /// Back to the standard starting position with all state cleared.
    /// Observers and configuration are kept.
    pub fn reset_game(&mut self) {
        self.load_position(Position::new());
        info!("new game, {} to move", self.position.turn());
    }

    /// Replace the position wholesale, clearing selection and history.
    pub fn load_position(&mut self, position: Position) {
        self.position = position;
        self.selected = None;
        self.history.clear();
        self.orientation = if self.config.auto_flip {
            Orientation::facing(self.position.turn())
        } else {
            self.config.orientation
        };
        self.update_game_state();
    }

    /// Handle a click on `sq`.
    pub fn select_square(&mut self, sq: Square) -> Selection {
        if self.status.is_over() {
            return Selection::Ignored;
        }
        if !sq.is_in_bounds() {
            return self.clear_selection();
        }

        let own_piece = self
            .position
            .piece_at(sq)
            .is_some_and(|p| p.color == self.position.turn());

        match self.selected {
            None if own_piece => {
                self.selected = Some(sq);
                Selection::Selected(sq)
            }
            None => Selection::Ignored,
            Some(from) if own_piece && from != sq => {
                self.selected = Some(sq);
                Selection::Selected(sq)
            }
            Some(from) => {
                self.selected = None;
                match self.attempt_move(from, sq) {
                    Some(record) => Selection::Moved(record),
                    None => Selection::Cleared,
                }
            }
        }
    }

    pub fn clear_selection(&mut self) -> Selection {
        if self.selected.take().is_some() {
            Selection::Cleared
        } else {
            Selection::Ignored
        }
    }

    /// Play `from -> to` for the side to move if it is legal.
    ///
    /// On success the turn passes, status is recomputed, the move is recorded
    /// and observers are notified.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        if self.status.is_over() {
            return None;
        }
        let record = self.position.play(Move::new(from, to))?;
        self.selected = None;
        self.history.push(record);
        if self.config.auto_flip {
            self.orientation = Orientation::facing(self.position.turn());
        }

        for observer in &mut self.observers {
            observer.on_move(&record);
        }
        self.update_game_state();
        Some(record)
    }

    /// Recompute status for the side to move and report changes.
    pub fn update_game_state(&mut self) -> GameStatus {
        let previous = self.status;
        self.status = self.position.status();

        if self.status != previous {
            match self.status {
                GameStatus::Checkmate => {
                    info!("checkmate, {} wins", self.position.turn().opponent());
                }
                GameStatus::Stalemate => info!("stalemate, the game is drawn"),
                GameStatus::Check => info!("{} king is in check", self.position.turn()),
                GameStatus::Playing => {}
            }
            for observer in &mut self.observers {
                observer.on_status(self.status);
            }
        }
        self.status
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.position.piece_at(sq)
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant_target()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations for the piece on `from`, empty unless it belongs
    /// to the side to move.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.position.piece_at(from) {
            Some(p) if p.color == self.position.turn() && !self.status.is_over() => {
                self.position.valid_destinations(from)
            }
            _ => Vec::new(),
        }
    }

    /// Destinations for the currently selected piece.
    #[must_use]
    pub fn selected_destinations(&self) -> Vec<Square> {
        self.selected
            .map(|sq| self.legal_destinations(sq))
            .unwrap_or_default()
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.position.all_valid_moves(self.position.turn())
    }

    /// The side to move's king square while it is in check or mated.
    #[must_use]
    pub fn king_highlight(&self) -> Option<Square> {
        if self.status.highlights_king() {
            self.position.board().find_king(self.position.turn())
        } else {
            None
        }
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(MoveRecord::as_move)
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.position.turn().opponent())
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn set_auto_flip(&mut self, auto_flip: bool) {
        self.config.auto_flip = auto_flip;
        if auto_flip {
            self.orientation = Orientation::facing(self.position.turn());
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn flip_board(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Board square under a view cell in the current orientation.
    #[must_use]
    pub fn view_to_square(&self, col: usize, row: usize) -> Option<Square> {
        self.orientation.view_to_square(col, row)
    }
}
