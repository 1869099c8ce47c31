use crate::ID;
use crate::registry::Player;

/// Reasons an inbound event is refused.
/// Every variant is local and recoverable: the offending event is dropped,
/// someone is told why, and the tournament carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Move from a player who does not hold the turn, or after the game ended.
    NotYourTurn(ID<Player>),
    /// Event referencing an identity the registry does not know.
    UnknownPlayer(ID<Player>),
    /// The other participant of a game has left.
    OpponentGone(ID<Player>),
    /// Join from an identity that is already registered.
    AlreadyRegistered(ID<Player>),
    /// Move from a player who is not seated in any game.
    NotInGame(ID<Player>),
    /// Pairing of a player who is already seated.
    Seated(ID<Player>),
    /// Tournament start with nobody to pair.
    NoPlayers,
    /// Round advance requested after the final round.
    ScheduleExhausted,
    /// Tournament start while one is already running.
    InProgress,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotYourTurn(_) => write!(f, "Not your turn."),
            Self::UnknownPlayer(_) => write!(f, "Player not found."),
            Self::OpponentGone(_) => write!(f, "Your opponent disconnected."),
            Self::AlreadyRegistered(_) => write!(f, "Already registered."),
            Self::NotInGame(_) => write!(f, "You are not in a game. Waiting for the next round."),
            Self::Seated(_) => write!(f, "Already seated in a game."),
            Self::NoPlayers => write!(f, "No players to start a tournament!"),
            Self::ScheduleExhausted => write!(f, "Every round has already been played."),
            Self::InProgress => write!(f, "A tournament is already in progress."),
        }
    }
}

impl std::error::Error for Rejection {}

impl Rejection {
    /// The player this rejection should be reported to, if any.
    /// Tournament-level rejections go to the commander instead.
    pub fn player(&self) -> Option<ID<Player>> {
        match self {
            Self::NotYourTurn(id)
            | Self::UnknownPlayer(id)
            | Self::OpponentGone(id)
            | Self::AlreadyRegistered(id)
            | Self::NotInGame(id)
            | Self::Seated(id) => Some(*id),
            Self::NoPlayers | Self::ScheduleExhausted | Self::InProgress => None,
        }
    }
}
