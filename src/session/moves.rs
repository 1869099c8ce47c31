use colored::*;
use std::fmt::{Display, Formatter, Result};

/// One ply in a game's append-only log.
/// Plain and bonus continues advance the turn count identically;
/// the distinction only shows up in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Plain,
    Bonus,
    Take,
}

impl Move {
    pub fn symbol(&self) -> char {
        match self {
            Self::Plain => '0',
            Self::Bonus => '2',
            Self::Take => 'x',
        }
    }
    pub fn is_take(&self) -> bool {
        matches!(self, Self::Take)
    }
}

impl TryFrom<char> for Move {
    type Error = &'static str;
    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '0' => Ok(Self::Plain),
            '2' => Ok(Self::Bonus),
            'x' => Ok(Self::Take),
            _ => Err("invalid move symbol"),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Plain => write!(f, "{}", "PASS".cyan()),
            Self::Bonus => write!(f, "{}", "PASS+".yellow()),
            Self::Take => write!(f, "{}", "TAKE".red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn symbols_round_trip() {
        for m in [Move::Plain, Move::Bonus, Move::Take] {
            assert_eq!(Move::try_from(m.symbol()), Ok(m));
        }
        assert!(Move::try_from('?').is_err());
    }
}
