//! Console rendering for prompts, feedback, and summaries

use super::art::{BULL, COW, banner_rows, repeated_rows};
use crate::core::{Game, GuessStatus, Score};
use colored::Colorize;

/// Print the game introduction: banner art, title, and rules
pub fn print_intro(plain: bool) {
    println!();
    if !plain {
        for row in banner_rows() {
            println!("{row}");
        }
    }
    println!("\n{}\n", "            BULLS & COWS".bright_yellow().bold());
    println!("- An isogram is a word that does not contain any duplicate letters.");
    println!("- If your guess has a correct letter, you will get 1 cow.");
    println!("- If your guess has a correct letter and it is in the correct spot, you will get 1 bull.");
}

/// Announce the new round: word length and guess budget
pub fn print_round_intro(game: &Game) {
    println!(
        "\nCan you guess the {}-letter isogram I am thinking of?",
        game.hidden_word_length().to_string().bright_yellow()
    );
    println!(
        "- You have {} tries to guess this isogram.",
        game.max_tries().to_string().bright_yellow()
    );
}

/// Print the per-guess prompt: a dash placeholder per hidden letter and
/// the current try number
pub fn print_guess_prompt(game: &Game) {
    println!("\nWord Length : {}", "-".repeat(game.hidden_word_length()));
    print!(
        "Guess {} of {}: ",
        game.current_try(),
        game.max_tries()
    );
}

/// Explain why a guess was rejected
///
/// Only called for non-`Ok` statuses; an `Ok` guess goes straight to
/// scoring and prints nothing here.
pub fn print_validation_message(status: GuessStatus) {
    let message = match status {
        GuessStatus::Ok => return,
        GuessStatus::NotIsogram => "Guess is not an isogram - contains duplicate letters",
        GuessStatus::NotLowercase => "Guess contains uppercase letters",
        GuessStatus::NullOrEmptyString => "Guess is null or empty",
        GuessStatus::WrongLength => "Guess is the wrong length",
    };
    println!("{}", message.red());
}

/// Print the score for a guess, with one bull and one cow figure per
/// point when art is enabled
pub fn print_score(score: Score, try_number: u32, plain: bool) {
    println!("Guess {try_number}: {}", score.to_string().bright_cyan());

    if plain {
        return;
    }
    for row in repeated_rows(&BULL, score.bulls) {
        println!("{row}");
    }
    for row in repeated_rows(&COW, score.cows) {
        println!("{row}");
    }
}

/// Print the win/lose state at the end of a round
pub fn print_summary(game: &Game) {
    if game.is_won() {
        println!("\n{}", "You won the game!".green().bold());
    } else {
        println!("\n{}", "You ran out of tries.".red().bold());
    }
}
