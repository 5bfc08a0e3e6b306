//! Notifications for collaborators (sound, logging, move lists).

use log::info;

use crate::board::{GameStatus, MoveRecord};

/// Receives events from a `Game` after each completed move.
pub trait GameObserver {
    /// Called once per executed move, after the turn has passed.
    fn on_move(&mut self, record: &MoveRecord);

    /// Called when the recomputed status differs from the previous one.
    fn on_status(&mut self, _status: GameStatus) {}
}

/// Writes every event through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_move(&mut self, record: &MoveRecord) {
        info!("{record}");
    }

    fn on_status(&mut self, status: GameStatus) {
        info!("status: {status}");
    }
}
