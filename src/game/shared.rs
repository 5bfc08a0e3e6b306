//! Thread-safe handle to a game session.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::{Game, Selection};
use crate::board::{GameStatus, MoveRecord, Position, Square};

/// A `Game` behind a lock, cloneable across threads.
///
/// Every call holds the lock for its whole duration, so a legality check and
/// the move it validates can never interleave with another writer.
#[derive(Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Exclusive access for compound operations.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock()
    }

    pub fn select_square(&self, sq: Square) -> Selection {
        self.inner.lock().select_square(sq)
    }

    pub fn attempt_move(&self, from: Square, to: Square) -> Option<MoveRecord> {
        self.inner.lock().attempt_move(from, to)
    }

    pub fn reset_game(&self) {
        self.inner.lock().reset_game();
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.inner.lock().status()
    }

    /// A copy of the current position, safe to inspect without the lock.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.inner.lock().position().clone()
    }
}
