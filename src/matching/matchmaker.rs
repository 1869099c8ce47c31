use super::*;
use crate::ID;
use crate::Probability;
use crate::Rejection;
use crate::payoff::Escalation;
use crate::registry::*;
use crate::session::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Forms pairs from the registry and opens a session for each.
///
/// Every method takes the registry by `&mut`, so a pass can only run while
/// the caller holds the one lock guarding tournament state. Claims are
/// written to the registry the moment a pair forms, which keeps a player
/// out of two pairings even across back-to-back passes.
#[derive(Debug, Clone, Copy)]
pub struct Matchmaker {
    escalation: Escalation,
    bonus: Probability,
}

impl Matchmaker {
    pub fn new(escalation: Escalation, bonus: Probability) -> Self {
        Self { escalation, bonus }
    }
}

impl Matchmaker {
    /// Seat two players and open their game. The first argument moves first.
    pub fn open(
        &self,
        registry: &mut Registry,
        first: ID<Player>,
        second: ID<Player>,
        round: Option<usize>,
    ) -> Result<Session, Rejection> {
        let session = Session::new(first, second, round, self.escalation, self.bonus);
        registry.pair(first, second, session.id())?;
        log::debug!("[matchmaker] opened {}", session.id());
        Ok(session)
    }

    /// One no-repeat pass over a shuffled snapshot of the pool.
    ///
    /// Each unclaimed player is matched with the first later player that
    /// neither has faced. Players who have faced everyone else in the
    /// snapshot are reported as exhausted rather than paired with a repeat;
    /// anyone else left over just waits for the next pass.
    pub fn sweep<R>(&self, registry: &mut Registry, rng: &mut R) -> Sweep
    where
        R: Rng + ?Sized,
    {
        let mut pool = registry.pool();
        pool.shuffle(rng);
        let mut sweep = Sweep::default();
        let mut claimed = HashSet::new();
        for (i, a) in pool.iter().copied().enumerate() {
            if claimed.contains(&a) {
                continue;
            }
            if pool.len() > 1 && Self::exhausted(registry, a, &pool) {
                sweep.exhausted.push(a);
                continue;
            }
            let stranger = pool
                .iter()
                .skip(i + 1)
                .copied()
                .filter(|b| !claimed.contains(b))
                .find(|b| Self::strangers(registry, a, *b));
            match stranger.map(|b| (b, self.open(registry, a, b, None))) {
                Some((b, Ok(session))) => {
                    claimed.insert(a);
                    claimed.insert(b);
                    sweep.sessions.push(session);
                }
                Some((b, Err(e))) => log::warn!("[matchmaker] {} vs {}: {}", a.short(), b.short(), e),
                None => sweep.waiting.push(a),
            }
        }
        log::debug!(
            "[matchmaker] sweep of {} opened {} games, {} exhausted, {} waiting",
            pool.len(),
            sweep.sessions.len(),
            sweep.exhausted.len(),
            sweep.waiting.len()
        );
        sweep
    }
}

impl Matchmaker {
    /// Neither has faced the other.
    fn strangers(registry: &Registry, a: ID<Player>, b: ID<Player>) -> bool {
        let faced = |x: ID<Player>, y: ID<Player>| registry.get(x).is_some_and(|p| p.has_played(y));
        !faced(a, b) && !faced(b, a)
    }
    fn exhausted(registry: &Registry, a: ID<Player>, pool: &[ID<Player>]) -> bool {
        pool.iter()
            .filter(|b| **b != a)
            .all(|b| !Self::strangers(registry, a, *b))
    }
}
