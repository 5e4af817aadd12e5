//! Terminal output for the game
//!
//! All console rendering lives here: the ASCII art, the intro and rules
//! text, per-guess feedback, and the round summary. The engine itself
//! never prints.

pub mod art;
pub mod display;

pub use display::{
    print_guess_prompt, print_intro, print_round_intro, print_score, print_summary,
    print_validation_message,
};
