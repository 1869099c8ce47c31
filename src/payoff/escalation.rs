use super::*;
use crate::*;

/// Law by which the pot grows as the game goes on.
///
/// Rewards are keyed by role. The first mover's reward steps up on every
/// odd ply and the second mover's on every even ply, so whoever is about
/// to decide always sees the other side's reward grow if they pass.
///
/// - turn 0 and turn 1 both pay the base pair
/// - first mover grows with `(turns - 1) / 2`
/// - second mover grows with `turns / 2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Escalation {
    Linear {
        first: Points,
        second: Points,
        increment: Points,
    },
    Exponential {
        first: Points,
        second: Points,
        growth: f64,
    },
}

impl Default for Escalation {
    fn default() -> Self {
        Self::linear()
    }
}

impl Escalation {
    pub fn linear() -> Self {
        Self::Linear {
            first: BASE_FIRST,
            second: BASE_SECOND,
            increment: INCREMENT,
        }
    }
    pub fn exponential() -> Self {
        Self::Exponential {
            first: BASE_FIRST,
            second: BASE_SECOND,
            growth: GROWTH,
        }
    }
}

impl Escalation {
    /// Reward pair if the pot is taken after `turns` moves.
    pub fn payoff(&self, turns: usize) -> Payoff {
        let steps = Self::steps(turns);
        match *self {
            Self::Linear {
                first,
                second,
                increment,
            } => Payoff::from((
                first + steps.0 * increment,
                second + steps.1 * increment,
            )),
            Self::Exponential {
                first,
                second,
                growth,
            } => Payoff::from((
                Self::grow(first, growth, steps.0),
                Self::grow(second, growth, steps.1),
            )),
        }
    }
    /// Pot if taken now, alongside the pot one ply further.
    pub fn project(&self, turns: usize) -> Projection {
        Projection::from((self.payoff(turns), self.payoff(turns + 1)))
    }
}

impl Escalation {
    fn steps(turns: usize) -> (Points, Points) {
        let first = turns.saturating_sub(1) / 2;
        let second = turns / 2;
        (first as Points, second as Points)
    }
    fn grow(base: Points, growth: f64, steps: Points) -> Points {
        (base as f64 * growth.powi(steps as i32)).trunc() as Points
    }
}

impl TryFrom<&str> for Escalation {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::linear()),
            "exponential" => Ok(Self::exponential()),
            _ => Err("escalation must be linear or exponential"),
        }
    }
}

impl std::fmt::Display for Escalation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Linear {
                first,
                second,
                increment,
            } => write!(f, "linear ({}/{} +{})", first, second, increment),
            Self::Exponential {
                first,
                second,
                growth,
            } => write!(f, "exponential ({}/{} x{})", first, second, growth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn linear_known_values() {
        let law = Escalation::linear();
        assert_eq!(law.payoff(0), Payoff::from((2, 1)));
        assert_eq!(law.payoff(1), Payoff::from((2, 1)));
        assert_eq!(law.payoff(2), Payoff::from((2, 3)));
        assert_eq!(law.payoff(3), Payoff::from((4, 3)));
        assert_eq!(law.payoff(4), Payoff::from((4, 5)));
    }
    #[test]
    fn linear_recurrence() {
        let law = Escalation::linear();
        for turns in 1..200usize {
            let payoff = law.payoff(turns);
            assert_eq!(payoff.first, 2 + ((turns as u64 - 1) / 2) * 2);
            assert_eq!(payoff.second, 1 + (turns as u64 / 2) * 2);
        }
    }
    #[test]
    fn exactly_one_side_grows_per_ply() {
        let law = Escalation::linear();
        for turns in 1..100usize {
            let a = law.payoff(turns);
            let b = law.payoff(turns + 1);
            let grew = (b.first > a.first) as u8 + (b.second > a.second) as u8;
            assert_eq!(grew, 1, "turn {}", turns);
        }
    }
    #[test]
    fn exponential_known_values() {
        let law = Escalation::exponential();
        assert_eq!(law.payoff(0), Payoff::from((2, 1)));
        assert_eq!(law.payoff(1), Payoff::from((2, 1)));
        assert_eq!(law.payoff(2), Payoff::from((2, 2)));
        assert_eq!(law.payoff(3), Payoff::from((4, 2)));
        assert_eq!(law.payoff(6), Payoff::from((8, 8)));
    }
    #[test]
    fn exponential_truncates() {
        let law = Escalation::Exponential {
            first: 3,
            second: 3,
            growth: 1.5,
        };
        assert_eq!(law.payoff(2), Payoff::from((3, 4)));
        assert_eq!(law.payoff(4), Payoff::from((4, 6)));
    }
    #[test]
    fn projection_looks_one_ply_ahead() {
        let law = Escalation::linear();
        let projection = law.project(2);
        assert_eq!(projection.now, law.payoff(2));
        assert_eq!(projection.next, law.payoff(3));
    }
    #[test]
    fn parse_law() {
        assert_eq!(Escalation::try_from("Linear"), Ok(Escalation::linear()));
        assert_eq!(
            Escalation::try_from("exponential"),
            Ok(Escalation::exponential())
        );
        assert!(Escalation::try_from("cubic").is_err());
    }
}
