use crate::Points;
use crate::session::Role;

/// Reward pair for one game, indexed by mover order rather than by player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Payoff {
    pub first: Points,
    pub second: Points,
}

impl Payoff {
    /// Reward credited to whoever holds this role.
    pub fn of(&self, role: Role) -> Points {
        match role {
            Role::First => self.first,
            Role::Second => self.second,
        }
    }
    /// Reward credited to the other side of this role.
    pub fn against(&self, role: Role) -> Points {
        self.of(role.other())
    }
    pub fn total(&self) -> Points {
        self.first + self.second
    }
    /// The role with the strictly larger reward, if any.
    pub fn leader(&self) -> Option<Role> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(Role::First),
            std::cmp::Ordering::Less => Some(Role::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<(Points, Points)> for Payoff {
    fn from((first, second): (Points, Points)) -> Self {
        Self { first, second }
    }
}

impl From<Payoff> for (Points, Points) {
    fn from(payoff: Payoff) -> Self {
        (payoff.first, payoff.second)
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn indexes_by_role() {
        let payoff = Payoff::from((4, 3));
        assert_eq!(payoff.of(Role::First), 4);
        assert_eq!(payoff.of(Role::Second), 3);
        assert_eq!(payoff.against(Role::First), 3);
        assert_eq!(payoff.total(), 7);
    }
    #[test]
    fn leader_breaks_no_ties() {
        assert_eq!(Payoff::from((2, 1)).leader(), Some(Role::First));
        assert_eq!(Payoff::from((2, 3)).leader(), Some(Role::Second));
        assert_eq!(Payoff::from((3, 3)).leader(), None);
    }
}
