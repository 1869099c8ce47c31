//! Authoritative record of every known participant.
//!
//! Holds identity, seat, cumulative score, and opponent history for each
//! player. Pairing decisions live in [`crate::matching`]; the registry only
//! keeps the mutual-pairing invariant intact as players are seated and freed.
mod departure;
mod player;
mod registry;

pub use departure::*;
pub use player::*;
pub use registry::*;
