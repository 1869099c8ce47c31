use crate::Points;
use crate::Score;
use serde::Serialize;

/// Messages sent from the lobby to a connected player or commander.
/// Scores are always phrased from the recipient's side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// A game has been opened for you.
    SessionStarted {
        game: String,
        opponent: String,
        your_score: Points,
        opponents_score: Points,
        round: Option<usize>,
        your_turn: bool,
    },
    /// A continue was played. `your_score` is what you would get if the
    /// pot were taken now; `your_next` is one ply further.
    TurnUpdate {
        your_score: Points,
        opponents_score: Points,
        your_next: Points,
        opponents_next: Points,
        log: String,
        your_turn: bool,
    },
    /// The pot was taken.
    GameOver {
        winner: Option<String>,
        your_score: Points,
        opponents_score: Points,
        total_score: Score,
        final_log: String,
    },
    /// Display names of everyone registered, in join order.
    Roster { players: Vec<String> },
    /// You sit out this round.
    Bye { round: usize },
    Message { text: String },
}

impl Notice {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message { text: text.into() }
    }
    pub fn roster(players: Vec<String>) -> Self {
        Self::Roster { players }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<crate::Rejection> for Notice {
    fn from(rejection: crate::Rejection) -> Self {
        Self::message(rejection.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn serializes_with_type_tag() {
        let json = Notice::Bye { round: 2 }.to_json();
        assert_eq!(json, r#"{"type":"bye","round":2}"#);
        let json = Notice::message("hi").to_json();
        assert_eq!(json, r#"{"type":"message","text":"hi"}"#);
    }
    #[test]
    fn game_over_carries_names_and_totals() {
        let notice = Notice::GameOver {
            winner: None,
            your_score: 2,
            opponents_score: 2,
            total_score: 9,
            final_log: "abcd0123:0|x".to_string(),
        };
        let value = serde_json::from_str::<serde_json::Value>(&notice.to_json()).unwrap();
        assert_eq!(value["type"], "game_over");
        assert_eq!(value["winner"], serde_json::Value::Null);
        assert_eq!(value["total_score"], 9);
    }
}
