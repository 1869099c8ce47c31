/// How games are scheduled over the life of a tournament.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pre-computed round-robin, advanced round by round.
    #[default]
    Fixed,
    /// Continuous no-repeat rematching as games settle.
    Dynamic,
}

impl Mode {
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }
}

impl TryFrom<&str> for Mode {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "rounds" => Ok(Self::Fixed),
            "dynamic" | "continuous" => Ok(Self::Dynamic),
            _ => Err("mode must be fixed or dynamic"),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_aliases() {
        assert_eq!(Mode::try_from("Fixed").unwrap(), Mode::Fixed);
        assert_eq!(Mode::try_from("continuous").unwrap(), Mode::Dynamic);
        assert!(Mode::try_from("swiss").is_err());
        assert_eq!(Mode::default().to_string(), "fixed");
    }
}
