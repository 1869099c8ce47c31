use crate::ID;
use crate::Score;
use crate::registry::Player;

/// Latest cumulative score of one player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreRecord {
    pub player: ID<Player>,
    pub name: String,
    pub score: Score,
}

impl ScoreRecord {
    /// Totals never shrink, so a lower score is an older write that
    /// arrived late and must not replace this one.
    pub fn supersedes(&self, kept: &Self) -> bool {
        self.score >= kept.score
    }
}

impl From<&Player> for ScoreRecord {
    fn from(player: &Player) -> Self {
        Self {
            player: player.id(),
            name: player.name().to_string(),
            score: player.score(),
        }
    }
}
