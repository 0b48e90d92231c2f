//! Game statistics
//!
//! Round counters reset every game; the high score survives restarts.

use std::path::{Path, PathBuf};

use crate::highscores;
use crate::settings::StatsConfig;

/// Per-game counters. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
    pub ships_left: u32,
    pub score: u64,
    /// Starts at 1
    pub level: u32,
}

impl RoundStats {
    pub fn new(ship_limit: u32) -> Self {
        Self {
            ships_left: ship_limit,
            score: 0,
            level: 1,
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove a ship. Returns true while the player still has ships left.
    pub fn lose_ship(&mut self) -> bool {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left > 0
    }

    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
    }
}

/// Statistics for one game session, owned by the game loop
#[derive(Debug, Clone)]
pub struct GameStats {
    pub round: RoundStats,
    /// Whether a game is in progress
    pub game_active: bool,
    /// Best score seen, loaded from disk at startup
    pub high_score: u64,
    high_score_file: PathBuf,
}

impl GameStats {
    /// Create stats for a new session and load the stored high score
    pub fn new(ship_limit: u32, config: StatsConfig) -> Self {
        let mut stats = Self {
            round: RoundStats::new(ship_limit),
            game_active: false,
            high_score: 0,
            high_score_file: config.high_score_file,
        };
        stats.high_score = stats.load_high_score();
        stats
    }

    /// Reset the round counters. The high score is left alone.
    pub fn reset_stats(&mut self, ship_limit: u32) {
        self.round = RoundStats::new(ship_limit);
    }

    pub fn start_game(&mut self, ship_limit: u32) {
        self.reset_stats(ship_limit);
        self.game_active = true;
    }

    pub fn end_game(&mut self) {
        self.game_active = false;
    }

    pub fn high_score_file(&self) -> &Path {
        &self.high_score_file
    }

    /// Read the high score from disk; 0 if missing or unreadable
    pub fn load_high_score(&self) -> u64 {
        highscores::load_high_score(&self.high_score_file)
    }

    /// Write `value` to disk. Returns false if the write failed.
    pub fn save_high_score(&self, value: u64) -> bool {
        highscores::save_high_score(&self.high_score_file, value)
    }

    /// Save the in-memory high score
    pub fn persist_high_score(&self) -> bool {
        self.save_high_score(self.high_score)
    }

    /// Raise the high score to the current round score if beaten.
    /// Returns true when a new high score was set.
    pub fn check_high_score(&mut self) -> bool {
        if self.round.score > self.high_score {
            self.high_score = self.round.score;
            true
        } else {
            false
        }
    }
}
