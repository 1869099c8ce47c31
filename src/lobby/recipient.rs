use crate::ID;
use crate::registry::Player;

/// Who a notice is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Player(ID<Player>),
    /// Every connected commander.
    Commander,
    /// Every connected player.
    Everyone,
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player(id) => write!(f, "{}", id.short()),
            Self::Commander => write!(f, "commander"),
            Self::Everyone => write!(f, "everyone"),
        }
    }
}
