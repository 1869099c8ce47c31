use super::*;

/// Destination for settled games and score updates.
///
/// Failures are reported to the caller, which logs them; a broken sink
/// never interrupts the tournament.
pub trait Recorder: Send + Sync {
    /// Append one settled game.
    fn game(&self, record: &GameRecord) -> anyhow::Result<()>;
    /// Overwrite the stored totals of these players.
    fn scores(&self, records: &[ScoreRecord]) -> anyhow::Result<()>;
}
