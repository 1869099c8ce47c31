//! Tournament state behind one lock, and the async shell around it.
//!
//! [`Lobby`] is the synchronous core: every event takes `&mut self`, runs
//! to completion without I/O, and returns [`Effects`] describing what to
//! send, record, and schedule. [`Host`] owns the lobby behind a single
//! mutex, delivers notices through the [`Switchboard`], hands records to a
//! [`Recorder`](crate::records::Recorder), and runs deferred work as
//! independent tasks that each reacquire the lock.
mod commander;
mod config;
mod deferred;
mod effects;
mod host;
mod lobby;
mod notice;
mod recipient;
mod switchboard;

pub use commander::*;
pub use config::*;
pub use deferred::*;
pub use effects::*;
pub use host::*;
pub use lobby::*;
pub use notice::*;
pub use recipient::*;
pub use switchboard::*;
