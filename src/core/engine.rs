//! The Bulls & Cows game engine
//!
//! `Game` owns all round state and exposes the operations the console layer
//! drives: select the next hidden word, validate a guess, score a guess.
//! The engine performs no I/O and has no notion of "out of tries"; the
//! caller stops asking for guesses once `current_try` exceeds `max_tries`.

use super::guess::{GuessStatus, is_isogram, is_lowercase};
use super::score::Score;
use crate::wordlists::{WORDS, max_tries_for};

/// Game engine state for one process lifetime
///
/// Construct one `Game` and drive rounds against it: `reset` +
/// `advance_hidden_word` start a round, and the word selection cursor
/// persists across rounds so every catalog entry is played in rotation
/// before any repeats.
#[derive(Debug, Clone)]
pub struct Game {
    hidden_word: &'static str,
    word_index: Option<usize>,
    current_try: u32,
    won: bool,
}

impl Game {
    /// Create a fresh engine with no hidden word selected yet
    ///
    /// Call `advance_hidden_word` before playing; until then the hidden
    /// word is empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hidden_word: "",
            word_index: None,
            current_try: 1,
            won: false,
        }
    }

    /// Begin a new round: try counter back to 1, win flag cleared
    ///
    /// Word selection state is deliberately untouched so that consecutive
    /// rounds walk the catalog instead of replaying the same word.
    pub fn reset(&mut self) {
        self.current_try = 1;
        self.won = false;
    }

    /// Select the next hidden word from the catalog, wrapping at the end
    ///
    /// The first call selects the first catalog entry. Called once per
    /// round, after `reset`.
    pub fn advance_hidden_word(&mut self) {
        let next = match self.word_index {
            None => 0,
            Some(i) => (i + 1) % WORDS.len(),
        };
        self.word_index = Some(next);
        self.hidden_word = WORDS[next];
    }

    /// Maximum number of guesses allowed for the current hidden word
    ///
    /// The limit depends only on the word's length.
    ///
    /// # Panics
    /// Panics if the hidden word's length has no entry in the tries table.
    /// That can only happen if the catalog and table drift out of sync,
    /// which is an internal-consistency error, not a player input error.
    #[must_use]
    pub fn max_tries(&self) -> u32 {
        max_tries_for(self.hidden_word.len()).unwrap_or_else(|| {
            panic!(
                "no tries entry for word length {}; catalog and tries table out of sync",
                self.hidden_word.len()
            )
        })
    }

    /// The 1-based number of the guess the player is about to make
    #[inline]
    #[must_use]
    pub const fn current_try(&self) -> u32 {
        self.current_try
    }

    /// Length of the current hidden word in letters
    #[inline]
    #[must_use]
    pub const fn hidden_word_length(&self) -> usize {
        self.hidden_word.len()
    }

    /// Whether a guess this round has matched the hidden word exactly
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Classify a candidate guess without changing any state
    ///
    /// Checks run in priority order: emptiness, then length, then
    /// duplicate letters, then case. Length comes before the isogram check
    /// so a too-short guess is never reported as having duplicates, and
    /// case comes last because the isogram check already ignores it.
    #[must_use]
    pub fn validate_guess(&self, guess: &str) -> GuessStatus {
        if guess.is_empty() {
            GuessStatus::NullOrEmptyString
        } else if guess.len() != self.hidden_word.len() {
            GuessStatus::WrongLength
        } else if !is_isogram(guess) {
            GuessStatus::NotIsogram
        } else if !is_lowercase(guess) {
            GuessStatus::NotLowercase
        } else {
            GuessStatus::Ok
        }
    }

    /// Score a guess against the hidden word and advance the try counter
    ///
    /// Callers must validate with `validate_guess` first. The comparison
    /// deliberately runs over the shorter of the two lengths rather than
    /// rejecting a mismatched guess, so an unvalidated guess still yields a
    /// partial score; it can never reach a full bull count with fewer
    /// letters than the hidden word, so no false win is possible.
    ///
    /// Cow detection scans the whole hidden word for the letter. That is
    /// only correct because every catalog word is an isogram; against a
    /// hidden word with repeated letters it would overcount.
    ///
    /// The try counter increments on every call, win or not.
    pub fn submit_guess(&mut self, guess: &str) -> Score {
        let mut score = Score::default();

        let hidden = self.hidden_word.as_bytes();
        let compared = guess.len().min(hidden.len());
        for (i, byte) in guess.bytes().take(compared).enumerate() {
            let letter = byte.to_ascii_lowercase();
            if letter == hidden[i] {
                score.bulls += 1;
            } else if hidden.contains(&letter) {
                score.cows += 1;
            }
        }

        if score.is_win(hidden.len()) {
            self.won = true;
        }
        self.current_try += 1;

        score
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
