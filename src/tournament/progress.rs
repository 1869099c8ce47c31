/// Where the schedule stands after a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Dispatch this round next.
    Next(usize),
    /// The last round just completed.
    Finished,
}
