//! Bulls & Cows
//!
//! A console adaptation of Bulls & Cows, the game that inspired Mastermind.
//! A hidden isogram (a word with no repeated letters) is drawn from a fixed
//! catalog and the player guesses it, scoring a bull for every letter in the
//! right position and a cow for every letter that is present but misplaced.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::Game;
//!
//! let mut game = Game::new();
//! game.reset();
//! game.advance_hidden_word(); // first catalog entry: "cow"
//!
//! let score = game.submit_guess("cow");
//! assert_eq!(score.bulls, 3);
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Embedded word catalog and tries table
pub mod wordlists;

// Game loop driver
pub mod commands;

// Terminal output formatting
pub mod output;
