use super::*;
use crate::ID;
use crate::Probability;
use crate::Rejection;
use crate::payoff::*;
use crate::registry::Player;
use rand::Rng;

/// Turn state machine for one active pairing.
///
/// The first mover holds the turn on an empty log. Each continue appends a
/// plain or bonus move and hands the turn to the other side; a take appends
/// the final move and settles the pot at the count before it. Terminal is
/// irreversible, and the move log is append-only.
///
/// A move is accepted only from the current turn owner. Two racing moves
/// from the same actor are therefore harmless: the first flips the owner
/// and the second is rejected.
#[derive(Debug, Clone)]
pub struct Session {
    id: GameId,
    round: Option<usize>,
    seats: [ID<Player>; 2],
    moves: Vec<Move>,
    turn: Turn,
    escalation: Escalation,
    bonus: Probability,
}

impl Session {
    pub fn new(
        first: ID<Player>,
        second: ID<Player>,
        round: Option<usize>,
        escalation: Escalation,
        bonus: Probability,
    ) -> Self {
        Self {
            id: GameId::from((first, second)),
            round,
            seats: [first, second],
            moves: Vec::new(),
            turn: Turn::Choice(Role::First),
            escalation,
            bonus: Self::chance(bonus),
        }
    }
}

impl Session {
    pub fn id(&self) -> GameId {
        self.id
    }
    pub fn round(&self) -> Option<usize> {
        self.round
    }
    pub fn seats(&self) -> [ID<Player>; 2] {
        self.seats
    }
    pub fn seat(&self, role: Role) -> ID<Player> {
        self.seats[role.index()]
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn turns(&self) -> usize {
        self.moves.len()
    }
    pub fn is_terminal(&self) -> bool {
        self.turn.is_terminal()
    }
    /// Participant currently allowed to move.
    pub fn owner(&self) -> Option<ID<Player>> {
        self.turn.role().map(|role| self.seat(role))
    }
    pub fn role(&self, id: ID<Player>) -> Option<Role> {
        [Role::First, Role::Second]
            .into_iter()
            .find(|role| self.seat(*role) == id)
    }
    pub fn opponent(&self, id: ID<Player>) -> Option<ID<Player>> {
        self.role(id).map(|role| self.seat(role.other()))
    }
    /// Pot if taken now, and one ply further.
    pub fn projection(&self) -> Projection {
        self.escalation.project(self.turns())
    }
    /// Log line shown to players: `<game>:<sym>|<sym>|...`.
    pub fn log(&self) -> String {
        format!(
            "{}:{}",
            self.id,
            self.moves
                .iter()
                .map(|m| m.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|")
        )
    }
}

impl Session {
    /// Apply a move from `actor`. No state changes on rejection.
    pub fn apply<R>(
        &mut self,
        actor: ID<Player>,
        choice: Choice,
        rng: &mut R,
    ) -> Result<Outcome, Rejection>
    where
        R: Rng + ?Sized,
    {
        if self.owner() != Some(actor) {
            return Err(Rejection::NotYourTurn(actor));
        }
        match choice {
            Choice::Take => Ok(Outcome::Settled(self.take(actor))),
            Choice::Continue => Ok(Outcome::Continued(self.pass(rng))),
        }
    }
    /// Force the game to terminal without settling, as on a disconnect.
    /// Returns whether the game was still live.
    pub fn abandon(&mut self) -> bool {
        let live = !self.is_terminal();
        self.turn = Turn::Terminal;
        live
    }
}

impl Session {
    /// Out-of-range chances clamp; NaN means no bonus.
    fn chance(p: Probability) -> Probability {
        match p.is_nan() {
            true => 0.0,
            false => p.clamp(0.0, 1.0),
        }
    }
    fn take(&mut self, actor: ID<Player>) -> Settlement {
        let payoff = self.escalation.payoff(self.turns());
        self.moves.push(Move::Take);
        self.turn = Turn::Terminal;
        log::debug!("[session {}] {} takes {}", self.id, actor.short(), payoff);
        Settlement {
            game: self.id,
            round: self.round,
            seats: self.seats,
            taker: actor,
            moves: self.moves.clone(),
            payoff,
            log: self.log(),
        }
    }
    fn pass<R>(&mut self, rng: &mut R) -> Update
    where
        R: Rng + ?Sized,
    {
        let last = if rng.random_bool(self.bonus) {
            Move::Bonus
        } else {
            Move::Plain
        };
        self.moves.push(last);
        let role = self.turn.role().map(|r| r.other()).unwrap_or(Role::First);
        self.turn = Turn::Choice(role);
        log::debug!("[session {}] {} -> {}", self.id, last, role);
        Update {
            game: self.id,
            last,
            owner: self.seat(role),
            seats: self.seats,
            turns: self.turns(),
            projection: self.projection(),
            log: self.log(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session() -> (Session, ID<Player>, ID<Player>) {
        let a = ID::default();
        let b = ID::default();
        (Session::new(a, b, Some(0), Escalation::linear(), 0.25), a, b)
    }

    #[test]
    fn first_mover_starts() {
        let (session, a, _) = session();
        assert_eq!(session.owner(), Some(a));
        assert_eq!(session.turn(), Turn::Choice(Role::First));
        assert!(session.moves().is_empty());
        assert!(!session.is_terminal());
    }
    #[test]
    fn continue_flips_turn_and_grows_log() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, b) = session();
        for ply in 0..10 {
            let actor = if ply % 2 == 0 { a } else { b };
            let next = if ply % 2 == 0 { b } else { a };
            match session.apply(actor, Choice::Continue, rng) {
                Ok(Outcome::Continued(update)) => {
                    assert_eq!(update.owner, next);
                    assert!(!update.last.is_take());
                }
                other => panic!("expected continue, got {:?}", other),
            }
            assert_eq!(session.owner(), Some(next));
            assert_eq!(session.moves().len(), ply + 1);
        }
    }
    #[test]
    fn take_settles_at_count_before_take() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, b) = session();
        session.apply(a, Choice::Continue, rng).unwrap();
        match session.apply(b, Choice::Take, rng) {
            Ok(Outcome::Settled(settlement)) => {
                assert_eq!(settlement.payoff, Payoff::from((2, 1)));
                assert_eq!(settlement.earned(a), Some(2));
                assert_eq!(settlement.earned(b), Some(1));
                assert_eq!(settlement.taker, b);
                assert_eq!(settlement.winner(), Some(a));
                assert_eq!(settlement.moves.len(), 2);
                assert_eq!(settlement.moves.last(), Some(&Move::Take));
            }
            other => panic!("expected settlement, got {:?}", other),
        }
        assert!(session.is_terminal());
    }
    #[test]
    fn nothing_after_take() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, b) = session();
        session.apply(a, Choice::Take, rng).unwrap();
        assert_eq!(
            session.apply(a, Choice::Continue, rng).unwrap_err(),
            Rejection::NotYourTurn(a)
        );
        assert_eq!(
            session.apply(b, Choice::Take, rng).unwrap_err(),
            Rejection::NotYourTurn(b)
        );
        assert_eq!(session.moves().len(), 1);
    }
    #[test]
    fn out_of_turn_rejected_without_change() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, b) = session();
        assert_eq!(
            session.apply(b, Choice::Continue, rng).unwrap_err(),
            Rejection::NotYourTurn(b)
        );
        assert_eq!(session.owner(), Some(a));
        assert!(session.moves().is_empty());
    }
    #[test]
    fn duplicate_move_from_same_actor_rejected() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, _) = session();
        assert!(session.apply(a, Choice::Continue, rng).is_ok());
        assert!(session.apply(a, Choice::Continue, rng).is_err());
        assert_eq!(session.moves().len(), 1);
    }
    #[test]
    fn update_projects_pot_for_next_decider() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, b) = session();
        session.apply(a, Choice::Continue, rng).unwrap();
        match session.apply(b, Choice::Continue, rng) {
            Ok(Outcome::Continued(update)) => {
                assert_eq!(update.projection.now, Payoff::from((2, 3)));
                assert_eq!(update.projection.next, Payoff::from((4, 3)));
                assert_eq!(update.turns, 2);
            }
            other => panic!("expected continue, got {:?}", other),
        }
    }
    #[test]
    fn bonus_probability_extremes() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let a = ID::default();
        let b = ID::default();
        let mut always = Session::new(a, b, None, Escalation::linear(), 1.0);
        let mut never = Session::new(a, b, None, Escalation::linear(), 0.0);
        always.apply(a, Choice::Continue, rng).unwrap();
        never.apply(a, Choice::Continue, rng).unwrap();
        assert_eq!(always.moves(), &[Move::Bonus]);
        assert_eq!(never.moves(), &[Move::Plain]);
    }
    #[test]
    fn invalid_bonus_never_panics() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let a = ID::default();
        let b = ID::default();
        let mut nan = Session::new(a, b, None, Escalation::linear(), f64::NAN);
        let mut high = Session::new(a, b, None, Escalation::linear(), 1.5);
        let mut low = Session::new(a, b, None, Escalation::linear(), f64::NEG_INFINITY);
        nan.apply(a, Choice::Continue, rng).unwrap();
        high.apply(a, Choice::Continue, rng).unwrap();
        low.apply(a, Choice::Continue, rng).unwrap();
        assert_eq!(nan.moves(), &[Move::Plain]);
        assert_eq!(high.moves(), &[Move::Bonus]);
        assert_eq!(low.moves(), &[Move::Plain]);
    }
    #[test]
    fn log_format() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let a = ID::default();
        let b = ID::default();
        let mut session = Session::new(a, b, None, Escalation::linear(), 0.0);
        assert_eq!(session.log(), format!("{}:", session.id()));
        session.apply(a, Choice::Continue, rng).unwrap();
        session.apply(b, Choice::Take, rng).unwrap();
        assert_eq!(session.log(), format!("{}:0|x", session.id()));
    }
    #[test]
    fn abandon_is_terminal() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (mut session, a, _) = session();
        assert!(session.abandon());
        assert!(!session.abandon());
        assert!(session.apply(a, Choice::Take, rng).is_err());
    }
}
