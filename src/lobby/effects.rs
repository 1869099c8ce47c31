use super::*;
use crate::ID;
use crate::records::*;
use crate::registry::Player;

/// Everything a lobby event wants done once the lock is released.
#[derive(Debug, Default)]
pub struct Effects {
    pub notices: Vec<(Recipient, Notice)>,
    pub games: Vec<GameRecord>,
    pub scores: Vec<ScoreRecord>,
    pub deferred: Vec<Deferred>,
}

impl Effects {
    pub fn notify(&mut self, to: Recipient, notice: Notice) {
        self.notices.push((to, notice));
    }
    pub fn tell(&mut self, player: ID<Player>, notice: Notice) {
        self.notify(Recipient::Player(player), notice);
    }
    pub fn command(&mut self, notice: Notice) {
        self.notify(Recipient::Commander, notice);
    }
    pub fn defer(&mut self, deferred: Deferred) {
        self.deferred.push(deferred);
    }
    pub fn absorb(&mut self, other: Effects) {
        self.notices.extend(other.notices);
        self.games.extend(other.games);
        self.scores.extend(other.scores);
        self.deferred.extend(other.deferred);
    }
}

impl Effects {
    /// Notices addressed to exactly this player.
    pub fn to(&self, player: ID<Player>) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|(to, _)| *to == Recipient::Player(player))
            .map(|(_, n)| n)
            .collect()
    }
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
            && self.games.is_empty()
            && self.scores.is_empty()
            && self.deferred.is_empty()
    }
}

impl From<(Recipient, Notice)> for Effects {
    fn from(notice: (Recipient, Notice)) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }
}
