use crate::ID;
use crate::registry::Player;

/// Identity of one game, derived from its two participants in mover order.
/// A player sits in at most one live game, so no two concurrent games
/// share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GameId {
    first: ID<Player>,
    second: ID<Player>,
}

impl GameId {
    pub fn first(&self) -> ID<Player> {
        self.first
    }
    pub fn second(&self) -> ID<Player> {
        self.second
    }
    pub fn involves(&self, id: ID<Player>) -> bool {
        self.first == id || self.second == id
    }
}

impl From<(ID<Player>, ID<Player>)> for GameId {
    fn from((first, second): (ID<Player>, ID<Player>)) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first.short(), self.second.short())
    }
}
