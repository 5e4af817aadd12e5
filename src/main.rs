//! Bulls & Cows - CLI
//!
//! Console word-guessing game: guess the hidden isogram, scoring bulls for
//! correctly-placed letters and cows for misplaced ones.

use anyhow::Result;
use bulls_and_cows::commands::run_game_loop;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Guess the hidden isogram: bulls for placed letters, cows for misplaced ones",
    version
)]
struct Cli {
    /// Suppress the ASCII art banners (plain prompts only)
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_game_loop(cli.plain)
}
