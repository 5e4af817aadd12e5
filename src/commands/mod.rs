//! Game loop drivers

pub mod play;

pub use play::run_game_loop;
