//! Persisted artifacts.
//!
//! One [`GameRecord`] per settled game, appended, and one [`ScoreRecord`]
//! per player, overwritten with the latest total. Sinks implement
//! [`Recorder`] and are always called outside the lobby lock.
mod game;
mod journal;
mod memory;
mod recorder;
mod score;

pub use game::*;
pub use journal::*;
pub use memory::*;
pub use recorder::*;
pub use score::*;
