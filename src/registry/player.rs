use crate::ID;
use crate::Score;
use crate::session::GameId;
use crate::session::Role;
use std::collections::HashSet;

/// A connected participant and everything the tournament knows about them.
#[derive(Debug, Clone)]
pub struct Player {
    id: ID<Player>,
    name: String,
    ready: bool,
    seat: Option<Seat>,
    score: Score,
    played: HashSet<ID<Player>>,
}

/// Where a paired player sits: the opponent, the game, and mover order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub opponent: ID<Player>,
    pub game: GameId,
    pub role: Role,
}

impl Player {
    pub fn new(id: ID<Player>, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ready: true,
            seat: None,
            score: 0,
            played: HashSet::new(),
        }
    }
}

impl Player {
    pub fn id(&self) -> ID<Player> {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_ready(&self) -> bool {
        self.ready
    }
    pub fn in_game(&self) -> bool {
        self.seat.is_some()
    }
    /// Eligible for a new pairing.
    pub fn is_available(&self) -> bool {
        self.ready && !self.in_game()
    }
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }
    pub fn opponent(&self) -> Option<ID<Player>> {
        self.seat.map(|s| s.opponent)
    }
    pub fn game(&self) -> Option<GameId> {
        self.seat.map(|s| s.game)
    }
    pub fn is_first_mover(&self) -> bool {
        self.seat.is_some_and(|s| s.role == Role::First)
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn played(&self) -> &HashSet<ID<Player>> {
        &self.played
    }
    pub fn has_played(&self, other: ID<Player>) -> bool {
        self.played.contains(&other)
    }
}

impl Player {
    pub(super) fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
    pub(super) fn sit(&mut self, seat: Seat) {
        self.played.insert(seat.opponent);
        self.seat = Some(seat);
        self.ready = false;
    }
    pub(super) fn stand(&mut self) -> Option<Seat> {
        self.ready = true;
        self.seat.take()
    }
    pub(super) fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
    pub(super) fn credit(&mut self, delta: Score) -> Score {
        self.score = self.score.saturating_add(delta);
        self.score
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id.short())
    }
}
