//! The interactive game loop
//!
//! Drives the engine from the console: plays rounds until the player
//! declines to continue or stdin closes.

use crate::core::{Game, GuessStatus};
use crate::output::{
    print_guess_prompt, print_intro, print_round_intro, print_score, print_summary,
    print_validation_message,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Play rounds of Bulls & Cows until the player declines to continue
///
/// One `Game` lives for the whole session so the hidden word rotates
/// through the catalog across rounds.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_game_loop(plain: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    loop {
        print_intro(plain);
        play_round(&mut game, &mut input, plain)?;
        print_summary(&game);

        if !ask_to_play_again(&mut input)? {
            break;
        }
    }

    Ok(())
}

/// Play a single round: select the next word, then prompt until the word
/// is guessed or the tries run out
fn play_round<R: BufRead>(game: &mut Game, input: &mut R, plain: bool) -> Result<()> {
    game.reset();
    game.advance_hidden_word();
    print_round_intro(game);

    let max_tries = game.max_tries();
    while game.current_try() <= max_tries && !game.is_won() {
        print_guess_prompt(game);
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(guess) = read_line(input)? else {
            // stdin closed mid-round; treat like running out of tries
            return Ok(());
        };

        match game.validate_guess(&guess) {
            GuessStatus::Ok => {
                let try_number = game.current_try();
                let score = game.submit_guess(&guess);
                print_score(score, try_number, plain);
            }
            status => print_validation_message(status),
        }
    }

    Ok(())
}

/// Ask the player for a y/n answer, looping until one is given
///
/// Returns `false` on EOF so a closed stdin ends the session cleanly.
fn ask_to_play_again<R: BufRead>(input: &mut R) -> Result<bool> {
    loop {
        print!("\nPlay again? (y/n): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(response) = read_line(input)? else {
            return Ok(false);
        };

        match response.trim().to_ascii_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => {}
        }
    }
}

/// Read one line from the player, `None` on EOF
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }

    // Strip the trailing newline; the guess itself is passed through
    // untrimmed so stray spaces are rejected by validation.
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
