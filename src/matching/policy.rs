/// How a fixed schedule is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Deterministic circle method over a shuffled roster.
    #[default]
    Circle,
    /// Randomized perfect-stranger rounds, falling back to the circle method.
    Strangers,
}

impl TryFrom<&str> for Policy {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "strangers" | "random" => Ok(Self::Strangers),
            _ => Err("schedule must be circle or strangers"),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Strangers => write!(f, "strangers"),
        }
    }
}
