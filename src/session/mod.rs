mod choice;
mod game;
mod moves;
mod outcome;
mod role;
mod session;
mod turn;

pub use choice::*;
pub use game::*;
pub use moves::*;
pub use outcome::*;
pub use role::*;
pub use session::*;
pub use turn::*;
