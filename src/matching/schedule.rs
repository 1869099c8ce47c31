use super::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// One round of a fixed schedule.
pub type Round<T> = Vec<Pairing<T>>;

/// Every round of a fixed round-robin tournament, generated once up front.
///
/// An odd roster is padded with an empty slot, so each round carries
/// exactly one bye and each player sits out exactly once. An even roster
/// of N plays N−1 rounds covering every unordered pair exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    rounds: Vec<Round<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self { rounds: Vec::new() }
    }
}

impl<T> Schedule<T>
where
    T: Copy + PartialEq,
{
    /// Circle method: fix slot 0, rotate every other slot by one per round.
    pub fn circle(players: &[T]) -> Self {
        let mut slots = Self::slots(players);
        let n = slots.len();
        let mut rounds = Vec::with_capacity(n.saturating_sub(1));
        for _ in 1..n {
            rounds.push(
                (0..n / 2)
                    .map(|j| Pairing::from((slots[j], slots[n - 1 - j])))
                    .collect(),
            );
            if let Some(last) = slots.pop() {
                slots.insert(1, last);
            }
        }
        Self { rounds }
    }
    /// Randomized perfect-stranger rounds. The circle method over a shuffled
    /// roster never dead-ends; shuffling round order, table order and seat
    /// order on top hides the rotation, so no player can predict an opponent.
    pub fn strangers<R>(players: &[T], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut roster = players.to_vec();
        roster.shuffle(rng);
        let mut rounds = Self::circle(&roster).rounds;
        rounds.shuffle(rng);
        for round in rounds.iter_mut() {
            round.shuffle(rng);
            for pairing in round.iter_mut() {
                if rng.random_bool(0.5) {
                    *pairing = pairing.flip();
                }
            }
        }
        log::debug!("[schedule] built {} stranger rounds", rounds.len());
        Self { rounds }
    }
    pub fn from_policy<R>(policy: Policy, players: &[T], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match policy {
            Policy::Circle => Self::circle(players),
            Policy::Strangers => Self::strangers(players, rng),
        }
    }
}

impl<T> Schedule<T> {
    pub fn len(&self) -> usize {
        self.rounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    pub fn round(&self, i: usize) -> Option<&Round<T>> {
        self.rounds.get(i)
    }
    pub fn rounds(&self) -> &[Round<T>] {
        &self.rounds
    }
}

impl<T> Schedule<T>
where
    T: Copy + PartialEq,
{
    fn slots(players: &[T]) -> Vec<Option<T>> {
        let mut slots = players.iter().copied().map(Some).collect::<Vec<_>>();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }
        slots
    }
}
