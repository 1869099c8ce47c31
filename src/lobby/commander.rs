/// Marker for the operator connection that starts tournaments and
/// watches the roster.
#[derive(Debug, Clone, Copy)]
pub struct Commander;
