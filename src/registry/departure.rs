use super::Player;
use crate::ID;
use crate::session::GameId;

/// Everything left behind when a player is removed.
#[derive(Debug, Clone)]
pub struct Departure {
    pub player: Player,
    /// Game the player abandoned, if they were seated.
    pub game: Option<GameId>,
    /// Opponent released back to the pool, if they were seated.
    pub opponent: Option<ID<Player>>,
}
