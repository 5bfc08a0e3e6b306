use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Moves are (from, to) pairs, so positions whose tree contains a
    /// promotion count one node per promotion instead of four.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_valid_moves(self.turn);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| {
                let mut child = self.clone();
                let _ = child.apply(mv.from, mv.to);
                child.switch_turn();
                child.perft(depth - 1)
            })
            .sum()
    }

    /// Per-move node counts at the root, sorted by move.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(super::Move, u64)> {
        let mut out: Vec<_> = self
            .all_valid_moves(self.turn)
            .into_iter()
            .map(|mv| {
                let mut child = self.clone();
                let _ = child.apply(mv.from, mv.to);
                child.switch_turn();
                (mv, child.perft(depth.saturating_sub(1)))
            })
            .collect();
        out.sort_by_key(|(mv, _)| (mv.from, mv.to));
        out
    }
}
