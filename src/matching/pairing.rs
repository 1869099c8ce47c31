/// Two slots of one scheduled game. An empty slot makes the other a bye.
/// The first slot moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing<T> {
    pub first: Option<T>,
    pub second: Option<T>,
}

impl<T> Pairing<T>
where
    T: Copy + PartialEq,
{
    /// Both participants, in mover order, when this is a real game.
    pub fn game(&self) -> Option<(T, T)> {
        match (self.first, self.second) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
    /// The lone participant, when the other slot is empty.
    pub fn bye(&self) -> Option<T> {
        match (self.first, self.second) {
            (Some(a), None) | (None, Some(a)) => Some(a),
            _ => None,
        }
    }
}

impl<T> From<(Option<T>, Option<T>)> for Pairing<T> {
    fn from((first, second): (Option<T>, Option<T>)) -> Self {
        Self { first, second }
    }
}

impl<T> Pairing<T> {
    pub fn versus(first: T, second: T) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
        }
    }
    /// Swap who moves first.
    pub fn flip(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}
