use crate::session::GameId;
use std::collections::HashMap;

/// Completion state of every live game dispatched in the active round.
/// Byes and skipped pairings are never tracked.
#[derive(Debug, Default, Clone)]
pub struct Tracker {
    games: HashMap<GameId, bool>,
}

impl Tracker {
    pub fn track(&mut self, game: GameId) {
        self.games.insert(game, false);
    }
    /// Mark a tracked game finished. Returns whether this call changed
    /// anything, so a game can never count twice.
    pub fn complete(&mut self, game: GameId) -> bool {
        match self.games.get_mut(&game) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }
    pub fn clear(&mut self) {
        self.games.clear();
    }
}

impl Tracker {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
    pub fn outstanding(&self) -> usize {
        self.games.values().filter(|done| !**done).count()
    }
    /// Every tracked game has finished. Vacuously true for an empty round.
    pub fn is_complete(&self) -> bool {
        self.games.values().all(|done| *done)
    }
}
