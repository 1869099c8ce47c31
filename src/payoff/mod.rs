mod escalation;
mod payoff;
mod projection;

pub use escalation::*;
pub use payoff::*;
pub use projection::*;
