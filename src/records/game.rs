use crate::ID;
use crate::payoff::Payoff;
use crate::registry::Player;
use crate::session::*;

/// One settled game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    pub game: String,
    pub round: Option<usize>,
    pub first: ID<Player>,
    pub second: ID<Player>,
    pub moves: Vec<Move>,
    pub log: String,
    pub payoff: Payoff,
    pub settled_at: u64,
}

impl From<&Settlement> for GameRecord {
    fn from(settlement: &Settlement) -> Self {
        Self {
            game: settlement.game.to_string(),
            round: settlement.round,
            first: settlement.seats[Role::First.index()],
            second: settlement.seats[Role::Second.index()],
            moves: settlement.moves.clone(),
            log: settlement.log.clone(),
            payoff: settlement.payoff,
            settled_at: crate::now(),
        }
    }
}
