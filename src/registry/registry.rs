use super::*;
use crate::ID;
use crate::Rejection;
use crate::Score;
use crate::session::GameId;
use crate::session::Role;
use std::collections::HashMap;

/// Every known participant, keyed by identity. Iteration follows join order.
///
/// Pairing is always mutual: seating or releasing one side of a game
/// seats or releases the other in the same call.
#[derive(Debug, Default)]
pub struct Registry {
    players: HashMap<ID<Player>, Player>,
    order: Vec<ID<Player>>,
}

impl Registry {
    /// Create a ready player with an empty opponent history.
    pub fn register(&mut self, id: ID<Player>, name: &str) -> Result<&Player, Rejection> {
        if self.players.contains_key(&id) {
            return Err(Rejection::AlreadyRegistered(id));
        }
        log::debug!("[registry] registered {} as {}", id.short(), name);
        self.order.push(id);
        let player = self.players.entry(id).or_insert_with(|| Player::new(id, name));
        Ok(&*player)
    }
    /// Refresh the display name of an already registered player.
    pub fn rename(&mut self, id: ID<Player>, name: &str) -> Result<(), Rejection> {
        self.get_mut(id).map(|p| p.rename(name))
    }
    /// Remove a player. A seated opponent is released back to the pool;
    /// telling them is up to the caller.
    pub fn unregister(&mut self, id: ID<Player>) -> Result<Departure, Rejection> {
        let mut player = self
            .players
            .remove(&id)
            .ok_or(Rejection::UnknownPlayer(id))?;
        self.order.retain(|o| *o != id);
        let seat = player.stand();
        let opponent = seat.map(|s| s.opponent).filter(|o| self.free(*o, id));
        log::debug!("[registry] unregistered {}", id.short());
        Ok(Departure {
            player,
            game: seat.map(|s| s.game),
            opponent,
        })
    }
    /// Add to a player's cumulative score, returning the new total.
    pub fn record(&mut self, id: ID<Player>, delta: Score) -> Result<Score, Rejection> {
        self.get_mut(id).map(|p| p.credit(delta))
    }
    pub fn mark_ready(&mut self, id: ID<Player>) -> Result<(), Rejection> {
        self.get_mut(id).map(|p| p.set_ready(true))
    }
    /// Seat two available players against each other. Both leave the pool
    /// and each enters the other's history.
    pub fn pair(
        &mut self,
        first: ID<Player>,
        second: ID<Player>,
        game: GameId,
    ) -> Result<(), Rejection> {
        for id in [first, second] {
            match self.players.get(&id) {
                None => return Err(Rejection::UnknownPlayer(id)),
                Some(p) if p.in_game() => return Err(Rejection::Seated(id)),
                Some(_) => {}
            }
        }
        self.get_mut(first)?.sit(Seat {
            opponent: second,
            game,
            role: Role::First,
        });
        self.get_mut(second)?.sit(Seat {
            opponent: first,
            game,
            role: Role::Second,
        });
        Ok(())
    }
    /// Free a player and their opponent, marking both ready.
    /// Returns the opponent that was released alongside.
    pub fn release(&mut self, id: ID<Player>) -> Result<Option<ID<Player>>, Rejection> {
        let seat = self.get_mut(id)?.stand();
        Ok(seat.map(|s| s.opponent).filter(|o| self.free(*o, id)))
    }
    /// Free everyone, as when a tournament resets.
    pub fn release_all(&mut self) {
        self.players.values_mut().for_each(|p| {
            p.stand();
        });
    }
}

impl Registry {
    pub fn get(&self, id: ID<Player>) -> Option<&Player> {
        self.players.get(&id)
    }
    pub fn contains(&self, id: ID<Player>) -> bool {
        self.players.contains_key(&id)
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.order.iter().filter_map(|id| self.players.get(id))
    }
    /// Players eligible for a new pairing, in join order.
    pub fn pool(&self) -> Vec<ID<Player>> {
        self.iter()
            .filter(|p| p.is_available())
            .map(|p| p.id())
            .collect()
    }
    /// Possible opponents for `id`: everyone available except `id` itself,
    /// and except past opponents when `strangers` is set.
    pub fn eligible(&self, id: ID<Player>, strangers: bool) -> Result<Vec<ID<Player>>, Rejection> {
        let player = self.get(id).ok_or(Rejection::UnknownPlayer(id))?;
        Ok(self
            .iter()
            .filter(|p| p.id() != id)
            .filter(|p| p.is_available())
            .filter(|p| !strangers || !player.has_played(p.id()))
            .map(|p| p.id())
            .collect())
    }
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|p| p.name().to_string()).collect()
    }
    pub fn name(&self, id: ID<Player>) -> String {
        self.get(id)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| id.short())
    }
}

impl Registry {
    fn get_mut(&mut self, id: ID<Player>) -> Result<&mut Player, Rejection> {
        self.players.get_mut(&id).ok_or(Rejection::UnknownPlayer(id))
    }
    /// Stand `other` up if they are still seated against `id`.
    fn free(&mut self, other: ID<Player>, id: ID<Player>) -> bool {
        match self.players.get_mut(&other) {
            Some(p) if p.opponent() == Some(id) => p.stand().is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(n: usize) -> (Registry, Vec<ID<Player>>) {
        let mut registry = Registry::default();
        let ids = (0..n).map(|_| ID::default()).collect::<Vec<_>>();
        for (i, id) in ids.iter().enumerate() {
            registry.register(*id, &format!("p{}", i)).unwrap();
        }
        (registry, ids)
    }
    fn pair(registry: &mut Registry, a: ID<Player>, b: ID<Player>) {
        registry.pair(a, b, GameId::from((a, b))).unwrap();
    }

    #[test]
    fn register_creates_ready_player() {
        let (registry, ids) = registry(1);
        let player = registry.get(ids[0]).unwrap();
        assert!(player.is_ready());
        assert!(!player.in_game());
        assert!(player.played().is_empty());
        assert_eq!(player.score(), 0);
    }
    #[test]
    fn duplicate_register_rejected() {
        let (mut registry, ids) = registry(1);
        assert_eq!(
            registry.register(ids[0], "again").unwrap_err(),
            Rejection::AlreadyRegistered(ids[0])
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.pool().len(), 1);
    }
    #[test]
    fn pairing_is_mutual() {
        let (mut registry, ids) = registry(2);
        pair(&mut registry, ids[0], ids[1]);
        let a = registry.get(ids[0]).unwrap();
        let b = registry.get(ids[1]).unwrap();
        assert_eq!(a.opponent(), Some(ids[1]));
        assert_eq!(b.opponent(), Some(ids[0]));
        assert!(a.is_first_mover());
        assert!(!b.is_first_mover());
        assert!(a.has_played(ids[1]));
        assert!(b.has_played(ids[0]));
        assert!(registry.pool().is_empty());
    }
    #[test]
    fn cannot_pair_seated_player() {
        let (mut registry, ids) = registry(3);
        pair(&mut registry, ids[0], ids[1]);
        assert!(registry.pair(ids[2], ids[1], GameId::from((ids[2], ids[1]))).is_err());
        assert_eq!(registry.get(ids[1]).unwrap().opponent(), Some(ids[0]));
        assert!(!registry.get(ids[2]).unwrap().in_game());
    }
    #[test]
    fn release_frees_both_sides() {
        let (mut registry, ids) = registry(2);
        pair(&mut registry, ids[0], ids[1]);
        assert_eq!(registry.release(ids[1]).unwrap(), Some(ids[0]));
        assert_eq!(registry.pool(), ids);
        assert_eq!(registry.release(ids[0]).unwrap(), None);
    }
    #[test]
    fn unregister_releases_opponent() {
        let (mut registry, ids) = registry(2);
        pair(&mut registry, ids[0], ids[1]);
        let departure = registry.unregister(ids[0]).unwrap();
        assert_eq!(departure.opponent, Some(ids[1]));
        assert_eq!(departure.game, Some(GameId::from((ids[0], ids[1]))));
        let survivor = registry.get(ids[1]).unwrap();
        assert!(!survivor.in_game());
        assert!(survivor.is_ready());
        assert!(registry.unregister(ids[0]).is_err());
    }
    #[test]
    fn record_accumulates() {
        let (mut registry, ids) = registry(1);
        assert_eq!(registry.record(ids[0], 4).unwrap(), 4);
        assert_eq!(registry.record(ids[0], 3).unwrap(), 7);
        assert!(registry.record(ID::default(), 1).is_err());
    }
    #[test]
    fn eligible_excludes_self_seated_and_history() {
        let (mut registry, ids) = registry(4);
        pair(&mut registry, ids[0], ids[1]);
        registry.release(ids[0]).unwrap();
        pair(&mut registry, ids[2], ids[3]);
        let open = registry.eligible(ids[0], false).unwrap();
        assert_eq!(open, vec![ids[1]]);
        let strangers = registry.eligible(ids[0], true).unwrap();
        assert!(strangers.is_empty());
        registry.release(ids[2]).unwrap();
        let strangers = registry.eligible(ids[0], true).unwrap();
        assert_eq!(strangers, vec![ids[2], ids[3]]);
    }
    #[test]
    fn pool_follows_join_order() {
        let (registry, ids) = registry(5);
        assert_eq!(registry.pool(), ids);
        assert_eq!(registry.names(), vec!["p0", "p1", "p2", "p3", "p4"]);
    }
}
