use super::*;
use crate::ID;
use crate::registry::Player;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed recorder.
///
/// Settled games go one JSON object per line into
/// `<dir>/session_<unix-seconds>.jsonl`, a fresh file per run. Totals are
/// kept in `<dir>/scores.json`, rewritten whole on every update.
#[derive(Debug)]
pub struct Journal {
    games: PathBuf,
    scores: PathBuf,
    totals: Mutex<BTreeMap<ID<Player>, ScoreRecord>>,
}

impl Journal {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let games = dir.join(format!("session_{}.jsonl", crate::now()));
        let scores = dir.join("scores.json");
        log::info!("[journal] recording games to {}", games.display());
        Ok(Self {
            games,
            scores,
            totals: Mutex::new(BTreeMap::new()),
        })
    }
    pub fn games_path(&self) -> &std::path::Path {
        &self.games
    }
    pub fn scores_path(&self) -> &std::path::Path {
        &self.scores
    }
}

impl Recorder for Journal {
    fn game(&self, record: &GameRecord) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.games)?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        log::debug!("[journal] appended game {}", record.game);
        Ok(())
    }
    fn scores(&self, records: &[ScoreRecord]) -> anyhow::Result<()> {
        let mut totals = self.totals.lock().map_err(|e| anyhow::anyhow!("{}", e))?;
        for record in records {
            totals.entry(record.player)
                .and_modify(|kept| {
                    if record.supersedes(kept) {
                        *kept = record.clone();
                    }
                })
                .or_insert_with(|| record.clone());
        }
        let json = serde_json::to_string_pretty(&totals.values().collect::<Vec<_>>())?;
        std::fs::write(&self.scores, json)?;
        log::debug!("[journal] rewrote {} scores", totals.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::Payoff;
    use crate::session::Move;

    fn scratch() -> PathBuf {
        std::env::temp_dir().join(format!("centipede-journal-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn appends_games_as_json_lines() {
        let dir = scratch();
        let journal = Journal::new(&dir).unwrap();
        let record = GameRecord {
            game: "abcd0123".to_string(),
            round: Some(0),
            first: ID::default(),
            second: ID::default(),
            moves: vec![Move::Plain, Move::Take],
            log: "abcd0123:0|x".to_string(),
            payoff: Payoff::from((2, 1)),
            settled_at: 0,
        };
        journal.game(&record).unwrap();
        journal.game(&record).unwrap();
        let text = std::fs::read_to_string(journal.games_path()).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(serde_json::from_str::<GameRecord>(lines[1]).unwrap(), record);
        std::fs::remove_dir_all(dir).ok();
    }
    #[test]
    fn rewrites_scores_with_latest_totals() {
        let dir = scratch();
        let journal = Journal::new(&dir).unwrap();
        let (a, b) = (ID::default(), ID::default());
        let record = |player, score| ScoreRecord {
            player,
            name: "p".to_string(),
            score,
        };
        journal.scores(&[record(a, 2), record(b, 1)]).unwrap();
        journal.scores(&[record(a, 6)]).unwrap();
        let text = std::fs::read_to_string(journal.scores_path()).unwrap();
        let stored = serde_json::from_str::<Vec<ScoreRecord>>(&text).unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.contains(&record(a, 6)));
        assert!(stored.contains(&record(b, 1)));
        std::fs::remove_dir_all(dir).ok();
    }
    #[test]
    fn out_of_order_rewrite_keeps_higher_total() {
        let dir = scratch();
        let journal = Journal::new(&dir).unwrap();
        let a = ID::default();
        let record = |score| ScoreRecord {
            player: a,
            name: "p".to_string(),
            score,
        };
        journal.scores(&[record(9)]).unwrap();
        journal.scores(&[record(4)]).unwrap();
        let text = std::fs::read_to_string(journal.scores_path()).unwrap();
        let stored = serde_json::from_str::<Vec<ScoreRecord>>(&text).unwrap();
        assert_eq!(stored, vec![record(9)]);
        std::fs::remove_dir_all(dir).ok();
    }
}
