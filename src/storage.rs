//! JSON file persistence: the current match snapshot and the history of finished matches.

use crate::logic::Clock;
use crate::models::{MatchId, MatchState};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const MATCH_FILE: &str = "current_match.json";
const HISTORY_FILE: &str = "match_history.json";

/// Only the most recent finished matches are kept.
pub const HISTORY_LIMIT: usize = 50;

/// Errors from reading or writing the data directory.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StorageError::Json(e) => write!(f, "Storage JSON error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// Match snapshots stored as JSON files under one directory.
#[derive(Clone, Debug)]
pub struct MatchStore {
    dir: PathBuf,
}

impl MatchStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn match_path(&self) -> PathBuf {
        self.dir.join(MATCH_FILE)
    }

    fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    /// The saved match, if there is a usable one.
    ///
    /// Unreadable snapshots, snapshots without player names and snapshots whose score is
    /// inconsistent are deleted and reported as no saved match.
    pub fn load(&self) -> Option<MatchState> {
        let path = self.match_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<MatchState>(&text) {
            Ok(state) if !state.has_named_teams() => {
                log::warn!("Saved match has no player names, clearing");
                self.discard_snapshot();
                None
            }
            Ok(state) if !state.is_consistent() => {
                log::warn!("Saved match {} has an inconsistent score, clearing", state.id);
                self.discard_snapshot();
                None
            }
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("Saved match is unreadable ({}), clearing", e);
                self.discard_snapshot();
                None
            }
        }
    }

    fn discard_snapshot(&self) {
        if let Err(e) = self.clear() {
            log::warn!("Could not clear saved match: {}", e);
        }
    }

    pub fn save(&self, state: &MatchState) -> Result<(), StorageError> {
        write_json(&self.dir, &self.match_path(), state)
    }

    /// Remove the saved match. Missing files are fine.
    pub fn clear(&self) -> Result<(), StorageError> {
        remove_if_exists(&self.match_path())
    }

    /// Finished matches, most recent first. Missing or unreadable history is empty.
    pub fn load_history(&self) -> Vec<MatchState> {
        let path = self.history_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::warn!("Could not read {}: {}", path.display(), e);
                }
                return Vec::new();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("Match history is unreadable: {}", e);
            Vec::new()
        })
    }

    /// Prepend a finished match, stamping `finished_at` if it is not set yet.
    pub fn save_to_history(
        &self,
        state: &MatchState,
        clock: &impl Clock,
    ) -> Result<(), StorageError> {
        let mut archived = state.clone();
        archived.finished_at.get_or_insert_with(|| clock.now());

        let mut history = self.load_history();
        history.retain(|m| m.id != archived.id);
        history.insert(0, archived);
        history.truncate(HISTORY_LIMIT);
        write_json(&self.dir, &self.history_path(), &history)?;
        log::info!("Archived match {} ({} in history)", state.id, history.len());
        Ok(())
    }

    /// Remove one match from history. Returns whether it was there.
    pub fn delete_from_history(&self, id: MatchId) -> Result<bool, StorageError> {
        let mut history = self.load_history();
        let before = history.len();
        history.retain(|m| m.id != id);
        if history.len() == before {
            return Ok(false);
        }
        write_json(&self.dir, &self.history_path(), &history)?;
        Ok(true)
    }

    pub fn clear_history(&self) -> Result<(), StorageError> {
        remove_if_exists(&self.history_path())
    }
}

fn write_json<T: serde::Serialize + ?Sized>(
    dir: &Path,
    path: &Path,
    value: &T,
) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
