//! Runtime configuration read from the environment.
//!
//! `SCOREBOARD_DATA_DIR` (default `.scoreboard`) and `SCOREBOARD_SETS_TO_WIN` (default 2).

use crate::models::MatchConfig;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "SCOREBOARD_DATA_DIR";
pub const SETS_TO_WIN_VAR: &str = "SCOREBOARD_SETS_TO_WIN";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Used when a new match is created without an explicit set count.
    pub sets_to_win: u32,
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(".scoreboard")
}

pub fn default_sets_to_win() -> u32 {
    MatchConfig::default().sets_to_win
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sets_to_win: default_sets_to_win(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let sets_to_win = lookup(SETS_TO_WIN_VAR)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(default_sets_to_win);
        Self {
            data_dir,
            sets_to_win,
        }
    }
}
