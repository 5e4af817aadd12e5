//! Bulls and cows scoring pair

use std::fmt;

/// The score awarded to a single guess
///
/// A bull is a guessed letter matching the hidden word in both identity and
/// position; a cow is a letter present in the hidden word at a different
/// position. A fresh `Score` is produced per guess and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub bulls: u32,
    pub cows: u32,
}

impl Score {
    /// Create a score from bull and cow counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: u32, cows: u32) -> Self {
        Self { bulls, cows }
    }

    /// Check whether this score wins against a hidden word of `hidden_len`
    /// letters, i.e. every position is a bull
    #[inline]
    #[must_use]
    pub const fn is_win(self, hidden_len: usize) -> bool {
        self.bulls as usize == hidden_len && hidden_len > 0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bulls = {}, Cows = {}", self.bulls, self.cows)
    }
}
