//! Round progression.
//!
//! A fixed tournament walks a pre-computed schedule one round at a time and
//! only moves on once every live game of the current round has finished.
//! A dynamic tournament has no rounds at all; it rematches as games end.
mod director;
mod mode;
mod progress;
mod tracker;

pub use director::*;
pub use mode::*;
pub use progress::*;
pub use tracker::*;
