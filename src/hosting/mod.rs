//! WebSocket transport for players and the commander.
mod bridge;
mod inbound;
mod server;

pub use bridge::*;
pub use inbound::*;
pub use server::*;
