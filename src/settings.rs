//! Game settings and stats configuration
//!
//! `Settings` is the slice of game settings the stats tracker reads.
//! `StatsConfig` resolves where the high score is persisted.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the high score file location
pub const HIGH_SCORE_FILE_ENV: &str = "HIGH_SCORE_FILE";

/// Default high score file, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "data/high_score.json";

/// Default number of ships per game
pub const DEFAULT_SHIP_LIMIT: u32 = 3;

/// Game settings consumed by the stats tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Ships the player starts each game with
    pub ship_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ship_limit: DEFAULT_SHIP_LIMIT,
        }
    }
}

impl Settings {
    pub fn with_ship_limit(ship_limit: u32) -> Self {
        Self { ship_limit }
    }
}

/// Where the high score lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    pub high_score_file: PathBuf,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl StatsConfig {
    /// Use an explicit high score path
    pub fn new(high_score_file: impl Into<PathBuf>) -> Self {
        Self {
            high_score_file: high_score_file.into(),
        }
    }

    /// Resolve from `HIGH_SCORE_FILE`, falling back to the default path
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(HIGH_SCORE_FILE_ENV))
    }

    /// Resolve from an optional override value. An empty override counts as unset.
    pub fn from_override(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => {
                log::debug!("High score file overridden: {}", Path::new(&path).display());
                Self::new(path)
            }
            _ => Self::default(),
        }
    }

    pub fn high_score_file(&self) -> &Path {
        &self.high_score_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_ship_limit() {
        assert_eq!(Settings::default().ship_limit, 3);
        assert_eq!(Settings::with_ship_limit(5).ship_limit, 5);
    }

    #[test]
    fn test_settings_from_json() {
        let settings: Settings = serde_json::from_str(r#"{"ship_limit": 2}"#).unwrap();
        assert_eq!(settings, Settings::with_ship_limit(2));
    }

    #[test]
    fn test_config_without_override_uses_default() {
        let config = StatsConfig::from_override(None);
        assert_eq!(config.high_score_file(), Path::new("data/high_score.json"));
    }

    #[test]
    fn test_config_override() {
        let config = StatsConfig::from_override(Some(OsString::from("/tmp/scores/best.json")));
        assert_eq!(config.high_score_file(), Path::new("/tmp/scores/best.json"));
    }

    #[test]
    fn test_config_empty_override_uses_default() {
        let config = StatsConfig::from_override(Some(OsString::new()));
        assert_eq!(config, StatsConfig::default());
    }
}
