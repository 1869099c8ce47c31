use super::*;
use crate::ID;
use crate::registry::Player;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory recorder, for tests and for runs that persist nothing.
#[derive(Debug, Default)]
pub struct Memory {
    games: Mutex<Vec<GameRecord>>,
    scores: Mutex<HashMap<ID<Player>, ScoreRecord>>,
}

impl Memory {
    pub fn games(&self) -> Vec<GameRecord> {
        self.games.lock().map(|g| g.clone()).unwrap_or_default()
    }
    pub fn score(&self, player: ID<Player>) -> Option<ScoreRecord> {
        self.scores
            .lock()
            .ok()
            .and_then(|s| s.get(&player).cloned())
    }
}

impl Recorder for Memory {
    fn game(&self, record: &GameRecord) -> anyhow::Result<()> {
        self.games
            .lock()
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .push(record.clone());
        Ok(())
    }
    fn scores(&self, records: &[ScoreRecord]) -> anyhow::Result<()> {
        let mut scores = self.scores.lock().map_err(|e| anyhow::anyhow!("{}", e))?;
        for record in records {
            scores.entry(record.player)
                .and_modify(|kept| {
                    if record.supersedes(kept) {
                        *kept = record.clone();
                    }
                })
                .or_insert_with(|| record.clone());
        }
        Ok(())
    }
}
