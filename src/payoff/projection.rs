use super::Payoff;

/// The two evaluations made on every move: the pot if it is taken now,
/// and the pot if the game runs one more ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub now: Payoff,
    pub next: Payoff,
}

impl From<(Payoff, Payoff)> for Projection {
    fn from((now, next): (Payoff, Payoff)) -> Self {
        Self { now, next }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "take {} / pass {}", self.now, self.next)
    }
}
