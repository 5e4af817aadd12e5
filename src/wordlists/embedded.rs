//! Embedded game data
//!
//! The hidden-word catalog and the word-length-to-tries table, compiled
//! into the binary. Rounds walk `WORDS` in order, wrapping at the end, so
//! the ordering here is gameplay-visible: the list ramps up from 3-letter
//! to 10-letter words.

/// The hidden-word catalog: lowercase isograms, played in this order
pub const WORDS: &[&str] = &[
    "cow", "and", "cat", "dog", "ant", "rug", "more", "case", "fish", "bird", "plane", "snail",
    "flame", "brush", "house", "mouse", "frame", "planet", "superb", "engulf",
];

/// Guess limits by hidden word length, ordered by length for readability
pub const TRIES_BY_LENGTH: &[(usize, u32)] = &[
    (3, 5),
    (4, 10),
    (5, 20),
    (6, 25),
    (7, 35),
    (8, 50),
    (9, 75),
    (10, 100),
];
