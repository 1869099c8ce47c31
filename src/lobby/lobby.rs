use super::*;
use crate::ID;
use crate::Rejection;
use crate::matching::Matchmaker;
use crate::records::*;
use crate::registry::*;
use crate::session::*;
use crate::tournament::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use std::collections::HashSet;

/// All tournament state of one run.
///
/// Every event handler takes `&mut self` and finishes without I/O, so
/// holding the lobby behind one lock is enough to keep a player out of two
/// pairings and to release every settled game exactly once. Delivery,
/// recording, and delayed work are returned as [`Effects`].
#[derive(Debug)]
pub struct Lobby {
    config: Config,
    registry: Registry,
    sessions: HashMap<GameId, Session>,
    director: Director,
    matchmaker: Matchmaker,
    idle: HashSet<ID<Player>>,
    rng: SmallRng,
}

impl Lobby {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            registry: Registry::default(),
            sessions: HashMap::new(),
            director: Director::default(),
            matchmaker: Matchmaker::new(config.escalation, config.bonus),
            idle: HashSet::new(),
            rng,
        }
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Inbound events.
impl Lobby {
    /// Register a newcomer. A repeated join only refreshes the name.
    pub fn join(&mut self, id: ID<Player>, name: &str) -> Effects {
        let mut effects = Effects::default();
        match self.registry.register(id, name) {
            Ok(player) => {
                log::info!("[lobby] {} joined", player);
                effects.tell(id, Notice::message(format!("Welcome, {}! Waiting for a game.", name)));
            }
            Err(Rejection::AlreadyRegistered(_)) => {
                log::debug!("[lobby] {} joined again as {}", id.short(), name);
                self.registry.rename(id, name).ok();
            }
            Err(e) => log::warn!("[lobby] join {}: {}", id.short(), e),
        }
        effects.command(self.roster());
        if !self.config.mode.is_fixed() {
            effects.defer(Deferred::Rematch);
        }
        effects
    }
    /// Remove a player. A live game is abandoned without payoff and the
    /// opponent goes back to the pool.
    pub fn leave(&mut self, id: ID<Player>) -> Effects {
        let mut effects = Effects::default();
        let departure = match self.registry.unregister(id) {
            Ok(departure) => departure,
            Err(e) => {
                log::debug!("[lobby] leave {}: {}", id.short(), e);
                return effects;
            }
        };
        log::info!("[lobby] {} left", departure.player);
        self.idle.remove(&id);
        effects.command(self.roster());
        if let Some(game) = departure.game {
            if let Some(mut session) = self.sessions.remove(&game) {
                session.abandon();
                log::info!("[lobby] game {} abandoned", game);
            }
            if let Some(survivor) = departure.opponent {
                effects.tell(survivor, Notice::from(Rejection::OpponentGone(id)));
            }
            effects.absorb(self.conclude(game));
        }
        effects
    }
    /// Route a move to the player's live game.
    pub fn play(&mut self, id: ID<Player>, choice: Choice) -> Effects {
        self.apply(id, choice)
            .inspect_err(|e| log::debug!("[lobby] {} {} rejected: {}", id.short(), choice, e))
            .unwrap_or_else(|e| Effects::from((Recipient::Player(id), Notice::from(e))))
    }
    /// Commander request to begin. Fixed mode builds the schedule and
    /// dispatches round 0; dynamic mode runs a matching pass.
    pub fn start(&mut self) -> Effects {
        let mut effects = Effects::default();
        match self.config.mode {
            Mode::Dynamic => {
                effects.command(Notice::message("Matching players continuously."));
                effects.absorb(self.rematch());
            }
            Mode::Fixed => {
                let roster = self.registry.pool();
                match self.director.start(roster, self.config.policy, &mut self.rng) {
                    Ok(rounds) => {
                        effects.command(Notice::message(format!(
                            "Tournament started with {} players over {} rounds.",
                            self.registry.len(),
                            rounds
                        )));
                        effects.absorb(self.dispatch(0));
                    }
                    Err(e) => {
                        log::info!("[lobby] start refused: {}", e);
                        effects.command(Notice::from(e));
                    }
                }
            }
        }
        effects
    }
    /// Leave round `from` behind. Ignored unless that round is still the
    /// active one, so a late or duplicate trigger does nothing.
    pub fn advance(&mut self, from: usize) -> Effects {
        if self.director.index() != Some(from) {
            log::debug!("[lobby] stale advance from round {}", from + 1);
            return Effects::default();
        }
        match self.director.advance() {
            Ok(Progress::Next(i)) => self.dispatch(i),
            Ok(Progress::Finished) => self.finish(),
            Err(e) => Effects::from((Recipient::Commander, Notice::from(e))),
        }
    }
    /// One no-repeat matching pass over the ready pool. Fixed mode ignores it.
    pub fn rematch(&mut self) -> Effects {
        let mut effects = Effects::default();
        if self.config.mode.is_fixed() {
            return effects;
        }
        let sweep = self.matchmaker.sweep(&mut self.registry, &mut self.rng);
        for player in sweep.exhausted {
            if self.idle.insert(player) {
                effects.tell(
                    player,
                    Notice::message("You have played everyone available. Waiting for new players."),
                );
            }
        }
        for session in sweep.sessions {
            session.seats().iter().for_each(|p| {
                self.idle.remove(p);
            });
            effects.absorb(self.started(&session));
            self.sessions.insert(session.id(), session);
        }
        effects
    }
    /// Current roster, for a commander that just connected.
    pub fn roster(&self) -> Notice {
        Notice::roster(self.registry.names())
    }
}

impl Lobby {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn director(&self) -> &Director {
        &self.director
    }
    pub fn session(&self, game: GameId) -> Option<&Session> {
        self.sessions.get(&game)
    }
    /// The live game this player sits in.
    pub fn session_of(&self, id: ID<Player>) -> Option<&Session> {
        self.registry
            .get(id)
            .and_then(|p| p.game())
            .and_then(|g| self.sessions.get(&g))
    }
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }
}

impl Lobby {
    fn apply(&mut self, id: ID<Player>, choice: Choice) -> Result<Effects, Rejection> {
        let game = self
            .registry
            .get(id)
            .ok_or(Rejection::UnknownPlayer(id))?
            .game()
            .ok_or(Rejection::NotInGame(id))?;
        let session = self
            .sessions
            .get_mut(&game)
            .ok_or(Rejection::NotInGame(id))?;
        match session.apply(id, choice, &mut self.rng)? {
            Outcome::Continued(update) => Ok(self.continued(update)),
            Outcome::Settled(settlement) => Ok(self.settled(settlement)),
        }
    }
    fn continued(&self, update: Update) -> Effects {
        let mut effects = Effects::default();
        let projection = update.projection;
        for role in [Role::First, Role::Second] {
            let seat = update.seats[role.index()];
            effects.tell(
                seat,
                Notice::TurnUpdate {
                    your_score: projection.now.of(role),
                    opponents_score: projection.now.against(role),
                    your_next: projection.next.of(role),
                    opponents_next: projection.next.against(role),
                    log: update.log.clone(),
                    your_turn: update.owner == seat,
                },
            );
        }
        effects
    }
    fn settled(&mut self, settlement: Settlement) -> Effects {
        let mut effects = Effects::default();
        self.sessions.remove(&settlement.game);
        log::info!("[lobby] {}", settlement);
        let winner = settlement.winner().map(|w| self.registry.name(w));
        for role in [Role::First, Role::Second] {
            let seat = settlement.seats[role.index()];
            let total = self
                .registry
                .record(seat, settlement.payoff.of(role))
                .inspect_err(|e| log::warn!("[lobby] crediting {}: {}", seat.short(), e))
                .unwrap_or_default();
            if let Some(player) = self.registry.get(seat) {
                effects.scores.push(ScoreRecord::from(player));
            }
            effects.tell(
                seat,
                Notice::GameOver {
                    winner: winner.clone(),
                    your_score: settlement.payoff.of(role),
                    opponents_score: settlement.payoff.against(role),
                    total_score: total,
                    final_log: settlement.log.clone(),
                },
            );
        }
        self.registry
            .release(settlement.taker)
            .inspect_err(|e| log::warn!("[lobby] releasing {}: {}", settlement.game, e))
            .ok();
        effects.games.push(GameRecord::from(&settlement));
        effects.absorb(self.conclude(settlement.game));
        effects
    }
    /// Bookkeeping once a game is over and its players are free.
    fn conclude(&mut self, game: GameId) -> Effects {
        let mut effects = Effects::default();
        match self.config.mode {
            Mode::Dynamic => effects.defer(Deferred::Rematch),
            Mode::Fixed => {
                if self.director.complete(game) {
                    if let Some(round) = self.director.index() {
                        log::info!("[lobby] round {} complete", round + 1);
                        effects.command(Notice::message(format!("Round {} complete.", round + 1)));
                        effects.defer(Deferred::Advance {
                            from: round,
                            delay: self.config.round_delay,
                        });
                    }
                }
            }
        }
        effects
    }
    /// Open every live game of round `i`. Byes and pairings with a
    /// departed participant are skipped with a notice to whoever remains.
    fn dispatch(&mut self, i: usize) -> Effects {
        let mut effects = Effects::default();
        let Some(round) = self.director.schedule().round(i).cloned() else {
            log::warn!("[lobby] no round {} to dispatch", i + 1);
            return effects;
        };
        self.director.open();
        log::info!("[lobby] round {} of {}", i + 1, self.director.rounds());
        effects.command(Notice::message(format!(
            "Round {} of {} starting.",
            i + 1,
            self.director.rounds()
        )));
        for pairing in round {
            if let Some(bye) = pairing.bye() {
                if self.registry.mark_ready(bye).is_ok() {
                    effects.tell(bye, Notice::message(format!("You have a bye in round {}.", i + 1)));
                    effects.tell(bye, Notice::Bye { round: i + 1 });
                }
                continue;
            }
            let Some((first, second)) = pairing.game() else {
                continue;
            };
            match (self.registry.contains(first), self.registry.contains(second)) {
                (true, true) => match self.matchmaker.open(&mut self.registry, first, second, Some(i)) {
                    Ok(session) => {
                        self.director.track(session.id());
                        effects.absorb(self.started(&session));
                        self.sessions.insert(session.id(), session);
                    }
                    Err(e) => log::warn!("[lobby] round {} pairing: {}", i + 1, e),
                },
                (true, false) => effects.absorb(self.stranded(first, second)),
                (false, true) => effects.absorb(self.stranded(second, first)),
                (false, false) => {}
            }
        }
        if self.director.tracker().is_empty() {
            log::info!("[lobby] round {} has no live games", i + 1);
            effects.defer(Deferred::Advance {
                from: i,
                delay: self.config.empty_round_delay,
            });
        }
        effects
    }
    /// Scheduled opponent is gone before the game could open.
    fn stranded(&mut self, player: ID<Player>, gone: ID<Player>) -> Effects {
        self.registry.mark_ready(player).ok();
        Effects::from((
            Recipient::Player(player),
            Notice::from(Rejection::OpponentGone(gone)),
        ))
    }
    fn started(&self, session: &Session) -> Effects {
        let mut effects = Effects::default();
        let pot = session.projection().now;
        for role in [Role::First, Role::Second] {
            let seat = session.seat(role);
            effects.tell(
                seat,
                Notice::SessionStarted {
                    game: session.id().to_string(),
                    opponent: self.registry.name(session.seat(role.other())),
                    your_score: pot.of(role),
                    opponents_score: pot.against(role),
                    round: session.round().map(|r| r + 1),
                    your_turn: role == Role::First,
                },
            );
        }
        effects
    }
    /// Last round done: announce, free everyone, and go back to not started.
    /// Scores survive for the next tournament.
    fn finish(&mut self) -> Effects {
        let mut effects = Effects::default();
        self.sessions.drain().for_each(|(_, mut s)| {
            s.abandon();
        });
        self.registry.release_all();
        log::info!("[lobby] tournament complete");
        effects.command(Notice::message("Tournament complete. Start again when ready."));
        effects.notify(
            Recipient::Everyone,
            Notice::message("All rounds complete! Thanks for playing."),
        );
        effects
    }
}
