use crate::ID;
use crate::registry::Player;
use crate::session::Session;

/// Result of one dynamic matching pass.
#[derive(Debug, Default)]
pub struct Sweep {
    /// Games opened during the pass, participants already seated.
    pub sessions: Vec<Session>,
    /// Players who have already faced everyone else in the pool.
    pub exhausted: Vec<ID<Player>>,
    /// Players left over this pass with strangers still out there.
    pub waiting: Vec<ID<Player>>,
}
