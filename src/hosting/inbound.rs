use crate::session::Choice;

/// Messages sent from a client over WebSocket.
///
/// Accepts either JSON (`{"move": "take"}`, `"start"`) or the bare words
/// `continue`, `pass`, `take`, and `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMessage {
    Move(Choice),
    Start,
}

impl TryFrom<&str> for ClientMessage {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<Self>(s).or_else(|_| match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            word => Choice::try_from(word)
                .map(Self::Move)
                .map_err(|_| "expected continue, pass, take, or start"),
        })
    }
}
