use crate::BONUS_PROBABILITY;
use crate::EMPTY_ROUND_DELAY;
use crate::Probability;
use crate::ROUND_DELAY;
use crate::matching::Policy;
use crate::payoff::Escalation;
use crate::tournament::Mode;
use std::time::Duration;

/// Tunables for one tournament run.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub mode: Mode,
    pub policy: Policy,
    pub escalation: Escalation,
    pub bonus: Probability,
    pub round_delay: Duration,
    pub empty_round_delay: Duration,
    /// Fixed seed for shuffles and bonus draws; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            policy: Policy::default(),
            escalation: Escalation::default(),
            bonus: BONUS_PROBABILITY,
            round_delay: ROUND_DELAY,
            empty_round_delay: EMPTY_ROUND_DELAY,
            seed: None,
        }
    }
}

impl Config {
    pub fn dynamic() -> Self {
        Self {
            mode: Mode::Dynamic,
            ..Self::default()
        }
    }
    /// Reject tunables that would fail at play time.
    pub fn validate(self) -> anyhow::Result<Self> {
        if !(0.0..=1.0).contains(&self.bonus) {
            anyhow::bail!("bonus probability must be within [0, 1], got {}", self.bonus);
        }
        Ok(self)
    }
    /// Seeded and without pauses, for tests.
    pub fn instant(seed: u64) -> Self {
        Self {
            round_delay: Duration::ZERO,
            empty_round_delay: Duration::ZERO,
            seed: Some(seed),
            ..Self::default()
        }
    }
}
