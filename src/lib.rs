//! Alien Invasion stats - round counters and a persisted high score
//!
//! Core modules:
//! - `stats`: Round statistics and the `GameStats` store
//! - `highscores`: JSON high score file load/save
//! - `settings`: Ship limit and high score file location

pub mod highscores;
pub mod settings;
pub mod stats;

pub use highscores::{HighScoreError, HighScoreRecord};
pub use settings::{Settings, StatsConfig};
pub use stats::{GameStats, RoundStats};
