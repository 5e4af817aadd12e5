//! Core domain types for Bulls & Cows
//!
//! This module contains the game engine and its supporting types with no
//! console I/O. Everything here is pure, testable, and driven entirely by
//! the caller.

mod engine;
mod guess;
mod score;

pub use engine::Game;
pub use guess::GuessStatus;
pub use score::Score;
