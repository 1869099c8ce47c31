/// What a player asks for on their turn.
/// Whether a continue lands as plain or bonus is drawn by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[serde(alias = "pass")]
    Continue,
    Take,
}

impl TryFrom<&str> for Choice {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "continue" | "pass" => Ok(Self::Continue),
            "take" => Ok(Self::Take),
            _ => Err("move must be continue, pass, or take"),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Take => write!(f, "take"),
        }
    }
}
