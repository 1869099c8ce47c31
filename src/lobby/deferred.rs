use std::time::Duration;

/// Work the lobby asks to run later, off the event-handling path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Move past round `from` after a pause. Dropped if the tournament
    /// has already left that round by the time it runs.
    Advance { from: usize, delay: Duration },
    /// Run a dynamic matching pass.
    Rematch,
}
