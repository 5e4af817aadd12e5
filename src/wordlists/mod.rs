//! Embedded word catalog and tries table
//!
//! The catalog and the per-length guess limits are fixed, read-only data
//! compiled into the binary. They are deliberately plain `const` tables:
//! nothing mutates them at runtime, and the tests below pin down the
//! invariants the engine relies on.

mod embedded;

pub use embedded::{TRIES_BY_LENGTH, WORDS};

/// Look up the maximum number of guesses allowed for a hidden word of
/// `length` letters
///
/// Returns `None` for lengths outside the table. Every catalog word's
/// length has an entry, so the engine treats `None` as a fatal
/// internal-consistency error.
#[must_use]
pub fn max_tries_for(length: usize) -> Option<u32> {
    TRIES_BY_LENGTH
        .iter()
        .find(|&&(len, _)| len == length)
        .map(|&(_, tries)| tries)
}
