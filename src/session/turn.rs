use super::Role;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Choice(Role),
}

impl Turn {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Choice(role) => Some(*role),
            Self::Terminal => None,
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(role) => write!(f, "{}", role),
            Self::Terminal => write!(f, "XX"),
        }
    }
}
