use super::*;
use crate::ID;
use crate::Rejection;
use crate::matching::*;
use crate::registry::Player;
use crate::session::GameId;
use rand::Rng;
use rand::seq::SliceRandom;

/// Fixed-schedule round controller.
///
/// The round index is `None` before a tournament starts and again after
/// the last round completes, so a finished tournament can be restarted.
/// Only games dispatched into the active round are tracked; byes and
/// pairings skipped for a departed participant never hold a round open.
#[derive(Debug, Default)]
pub struct Director {
    schedule: Schedule<ID<Player>>,
    index: Option<usize>,
    tracker: Tracker,
}

impl Director {
    /// Shuffle the roster, build every round, and point at round 0.
    /// Returns the number of rounds.
    pub fn start<R>(
        &mut self,
        mut roster: Vec<ID<Player>>,
        policy: Policy,
        rng: &mut R,
    ) -> Result<usize, Rejection>
    where
        R: Rng + ?Sized,
    {
        if self.in_progress() {
            return Err(Rejection::InProgress);
        }
        if roster.is_empty() {
            return Err(Rejection::NoPlayers);
        }
        roster.shuffle(rng);
        self.schedule = Schedule::from_policy(policy, &roster, rng);
        self.tracker.clear();
        self.index = Some(0);
        log::info!(
            "[director] {} players over {} rounds ({})",
            roster.len(),
            self.schedule.len(),
            policy
        );
        Ok(self.schedule.len())
    }
    /// Begin tracking a fresh round.
    pub fn open(&mut self) {
        self.tracker.clear();
    }
    /// Track a game dispatched into the active round.
    pub fn track(&mut self, game: GameId) {
        self.tracker.track(game);
    }
    /// Mark a game finished. Returns true exactly once per round: when this
    /// game was the last one outstanding.
    pub fn complete(&mut self, game: GameId) -> bool {
        if !self.in_progress() || !self.tracker.complete(game) {
            return false;
        }
        log::debug!("[director] {} games outstanding", self.tracker.outstanding());
        self.tracker.is_complete()
    }
    /// Move past the active round.
    pub fn advance(&mut self) -> Result<Progress, Rejection> {
        let next = self.index.ok_or(Rejection::ScheduleExhausted)? + 1;
        self.tracker.clear();
        if next < self.schedule.len() {
            self.index = Some(next);
            Ok(Progress::Next(next))
        } else {
            self.reset();
            Ok(Progress::Finished)
        }
    }
    /// Back to not started. The schedule is dropped with it.
    pub fn reset(&mut self) {
        self.index = None;
        self.tracker.clear();
        self.schedule = Schedule::default();
    }
}

impl Director {
    pub fn index(&self) -> Option<usize> {
        self.index
    }
    pub fn in_progress(&self) -> bool {
        self.index.is_some()
    }
    pub fn rounds(&self) -> usize {
        self.schedule.len()
    }
    pub fn schedule(&self) -> &Schedule<ID<Player>> {
        &self.schedule
    }
    /// Pairings of the active round.
    pub fn current(&self) -> Option<&Round<ID<Player>>> {
        self.index.and_then(|i| self.schedule.round(i))
    }
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}
