//! Pairing and session orchestration for live pass/take tournaments.
//!
//! Many participants connect, get paired into two-player games, and take
//! turns deciding whether to pass the pot along (letting it grow) or take it.
//! This crate holds every piece of tournament state in memory for one run.
//!
//! ## Modules
//!
//! - [`payoff`]: Escalation laws mapping a turn count to a reward pair
//! - [`session`]: Turn state machine for a single active game
//! - [`registry`]: Authoritative record of every known participant
//! - [`matching`]: Round-robin schedules and dynamic no-repeat matching
//! - [`tournament`]: Round progression and completion tracking
//! - [`lobby`]: Serialized core state plus its async shell
//! - [`records`]: Persisted artifacts for settled games and scores
//! - `hosting`: WebSocket transport adapter (feature `server`)
pub mod lobby;
pub mod matching;
pub mod payoff;
pub mod rejection;
pub mod records;
pub mod registry;
pub mod session;
pub mod tournament;

#[cfg(feature = "server")]
pub mod hosting;

pub use rejection::Rejection;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Reward from a single game.
pub type Points = u64;
/// Cumulative reward across every game a player has settled.
pub type Score = u64;
/// Chance of a bonus continue, and other Bernoulli parameters.
pub type Probability = f64;

// ============================================================================
// PAYOFF DEFAULTS
// ============================================================================
/// First mover's reward if the pot is taken before any move.
pub const BASE_FIRST: Points = 2;
/// Second mover's reward if the pot is taken before any move.
pub const BASE_SECOND: Points = 1;
/// Linear growth added every two plies.
pub const INCREMENT: Points = 2;
/// Exponential growth factor applied every two plies.
pub const GROWTH: f64 = 2.0;
/// Chance that a continue is logged as a bonus continue.
pub const BONUS_PROBABILITY: Probability = 0.25;

// ============================================================================
// TOURNAMENT PACING
// ============================================================================
/// Pause between a completed round and the dispatch of the next one.
pub const ROUND_DELAY: std::time::Duration = std::time::Duration::from_secs(2);
/// Pause before skipping a round that had no live games.
pub const EMPTY_ROUND_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Last four hex digits. v7 prefixes are timestamps and collide within
    /// the same millisecond, so the random tail is used instead.
    pub fn short(&self) -> String {
        let hex = self.inner.simple().to_string();
        hex[hex.len() - 4..].to_string()
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Terminal logging at INFO plus a DEBUG file log under `logs/`, one file per run.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/host_{}.log", now()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
/// Tournament state lives only in memory, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        log::warn!("interrupt received, shutting down tournament host");
        std::process::exit(0);
    });
}

/// Seconds since the unix epoch, for record timestamps and file names.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    struct Marker;
    #[test]
    fn ids_are_unique() {
        let a = ID::<Marker>::default();
        let b = ID::<Marker>::default();
        assert_ne!(a, b);
    }
    #[test]
    fn short_id_is_four_hex_digits() {
        let id = ID::<Marker>::default();
        assert_eq!(id.short().len(), 4);
        assert!(id.short().chars().all(|c| c.is_ascii_hexdigit()));
    }
    #[test]
    fn id_serializes_as_uuid() {
        let id = ID::<Marker>::default();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.inner()));
        let back = serde_json::from_str::<ID<Marker>>(&json).unwrap();
        assert_eq!(back, id);
    }
}
