use super::*;
use crate::ID;
use crate::Points;
use crate::payoff::*;
use crate::registry::Player;
use colored::Colorize;

/// What an accepted move produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The game goes on with the turn flipped.
    Continued(Update),
    /// The pot was taken and the game is over.
    Settled(Settlement),
}

/// State after a continue, for display to both participants.
#[derive(Debug, Clone)]
pub struct Update {
    pub game: GameId,
    pub last: Move,
    pub owner: ID<Player>,
    pub seats: [ID<Player>; 2],
    pub turns: usize,
    pub projection: Projection,
    pub log: String,
}

/// Final accounting of a game ended by a take.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub game: GameId,
    pub round: Option<usize>,
    pub seats: [ID<Player>; 2],
    pub taker: ID<Player>,
    pub moves: Vec<Move>,
    pub payoff: Payoff,
    pub log: String,
}

impl Settlement {
    pub fn role(&self, id: ID<Player>) -> Option<Role> {
        [Role::First, Role::Second]
            .into_iter()
            .find(|role| self.seats[role.index()] == id)
    }
    /// Reward credited to this participant.
    pub fn earned(&self, id: ID<Player>) -> Option<Points> {
        self.role(id).map(|role| self.payoff.of(role))
    }
    /// Participant with the larger reward; none on a tie.
    pub fn winner(&self) -> Option<ID<Player>> {
        self.payoff.leader().map(|role| self.seats[role.index()])
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let first = format!("+{}", self.payoff.first).green();
        let second = format!("+{}", self.payoff.second).green();
        write!(
            f,
            "{} after {} plies  P1 {:<5} P2 {:<5}",
            self.game,
            self.moves.len(),
            first,
            second
        )
    }
}
