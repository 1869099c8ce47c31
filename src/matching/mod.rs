//! Pairing generation.
//!
//! - [`Schedule`]: Fixed round-robin rounds built once per tournament
//! - [`Matchmaker`]: Dynamic no-repeat matching over the live pool
mod matchmaker;
mod pairing;
mod policy;
mod schedule;
mod sweep;

pub use matchmaker::*;
pub use pairing::*;
pub use policy::*;
pub use schedule::*;
pub use sweep::*;
