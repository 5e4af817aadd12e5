//! Guess classification
//!
//! A candidate guess is classified before it is scored. The checks run in a
//! fixed priority order so that a wrong-length guess is reported as such and
//! never masked by a duplicate-letter or case complaint.

use rustc_hash::FxHashSet;
use std::fmt;

/// Classification of a candidate guess against the current hidden word
///
/// `validate_guess` returns exactly one of these; callers are expected to
/// match exhaustively and only submit guesses classified as `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    /// Valid guess, ready to be scored
    Ok,
    /// Guess is the empty string
    NullOrEmptyString,
    /// Guess length differs from the hidden word length
    WrongLength,
    /// Guess repeats a letter (checked case-insensitively)
    NotIsogram,
    /// Guess contains a character that is not a lowercase ASCII letter
    NotLowercase,
}

impl fmt::Display for GuessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::NullOrEmptyString => write!(f, "guess is null or empty"),
            Self::WrongLength => write!(f, "guess is the wrong length"),
            Self::NotIsogram => write!(f, "guess contains duplicate letters"),
            Self::NotLowercase => write!(f, "guess contains uppercase letters"),
        }
    }
}

/// Check that a word has no repeated letters, ignoring case
///
/// The empty string is trivially an isogram.
#[must_use]
pub(crate) fn is_isogram(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.bytes()
        .map(|b| b.to_ascii_lowercase())
        .all(|b| seen.insert(b))
}

/// Check that every character is a lowercase ASCII letter
///
/// The empty string is neither uppercase nor lowercase and fails the check,
/// though `validate_guess` rejects it earlier as `NullOrEmptyString`.
#[must_use]
pub(crate) fn is_lowercase(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isogram_accepts_unique_letters() {
        assert!(is_isogram("cat"));
        assert!(is_isogram("planet"));
        assert!(is_isogram("a"));
        assert!(is_isogram(""));
    }

    #[test]
    fn isogram_rejects_duplicates() {
        assert!(!is_isogram("aab"));
        assert!(!is_isogram("banana"));
        assert!(!is_isogram("abcda"));
    }

    #[test]
    fn isogram_check_is_case_insensitive() {
        assert!(!is_isogram("Aa"));
        assert!(!is_isogram("aA"));
        assert!(is_isogram("Ab"));
    }

    #[test]
    fn lowercase_accepts_all_lower() {
        assert!(is_lowercase("cat"));
        assert!(is_lowercase("engulf"));
    }

    #[test]
    fn lowercase_rejects_upper_digits_and_empty() {
        assert!(!is_lowercase("Cat"));
        assert!(!is_lowercase("CAT"));
        assert!(!is_lowercase("ca7"));
        assert!(!is_lowercase("ca t"));
        assert!(!is_lowercase(""));
    }

    #[test]
    fn status_display_messages() {
        assert_eq!(
            GuessStatus::NotIsogram.to_string(),
            "guess contains duplicate letters"
        );
        assert_eq!(
            GuessStatus::WrongLength.to_string(),
            "guess is the wrong length"
        );
    }
}
