//! MatchSession: the single owner of the current match.
//!
//! Every transition goes through the session, which swaps in the new snapshot and saves it.

use crate::logic::{self, Clock};
use crate::models::{MatchState, Side, Team};
use crate::storage::{MatchStore, StorageError};

/// Errors from session operations.
#[derive(Debug)]
pub enum SessionError {
    /// No match has been created or resumed.
    NoMatch,
    Storage(StorageError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoMatch => write!(f, "No match in progress"),
            SessionError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NoMatch => None,
            SessionError::Storage(e) => Some(e),
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        SessionError::Storage(e)
    }
}

pub struct MatchSession<C: Clock> {
    store: MatchStore,
    clock: C,
    current: Option<MatchState>,
}

impl<C: Clock> MatchSession<C> {
    /// A session with no current match.
    pub fn new(store: MatchStore, clock: C) -> Self {
        Self {
            store,
            clock,
            current: None,
        }
    }

    /// A session holding the saved match, if one exists and is not finished. A won match
    /// was archived by its winning point, so it is not picked up again.
    pub fn resume(store: MatchStore, clock: C) -> Self {
        let current = store.load().filter(|m| !m.is_match_finished);
        if let Some(m) = &current {
            log::info!("Resumed match {} ({} points played)", m.id, m.point_history.len());
        }
        Self {
            store,
            clock,
            current,
        }
    }

    pub fn current(&self) -> Option<&MatchState> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    /// Replace any current match with a fresh one.
    pub fn new_match(
        &mut self,
        left_name: &str,
        right_name: &str,
        sets_to_win: u32,
    ) -> Result<&MatchState, SessionError> {
        let state = logic::create_match(left_name, right_name, sets_to_win);
        self.replace(state)
    }

    pub fn start(&mut self) -> Result<&MatchState, SessionError> {
        let next = logic::start_match(self.require()?, &self.clock);
        self.replace(next)
    }

    /// Award a point. A match-winning point also archives the match to history.
    pub fn point(&mut self, side: Side) -> Result<&MatchState, SessionError> {
        let ticked = logic::tick(self.require()?, &self.clock);
        let next = logic::apply_point(&ticked, side, &self.clock);
        if next.is_match_finished && !ticked.is_match_finished {
            let archived = logic::finish(&next, &self.clock);
            self.store.save_to_history(&archived, &self.clock)?;
        }
        self.replace(next)
    }

    pub fn undo(&mut self) -> Result<&MatchState, SessionError> {
        let ticked = logic::tick(self.require()?, &self.clock);
        let next = logic::undo_last_point(&ticked, &self.clock);
        self.replace(next)
    }

    pub fn set_team(&mut self, side: Side, team: Team) -> Result<&MatchState, SessionError> {
        let next = logic::set_team(self.require()?, side, team);
        self.replace(next)
    }

    /// End the session's match: archive it (if any point was played) and clear the save.
    pub fn finish(&mut self) -> Result<MatchState, SessionError> {
        let ticked = logic::tick(self.require()?, &self.clock);
        let archived = logic::finish(&ticked, &self.clock);
        if !archived.point_history.is_empty() {
            self.store.save_to_history(&archived, &self.clock)?;
        }
        self.store.clear()?;
        self.current = None;
        log::info!("Finished match {}", archived.id);
        Ok(archived)
    }

    /// Drop the current match without archiving it.
    pub fn discard(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.current = None;
        Ok(())
    }

    fn require(&self) -> Result<&MatchState, SessionError> {
        self.current.as_ref().ok_or(SessionError::NoMatch)
    }

    fn replace(&mut self, state: MatchState) -> Result<&MatchState, SessionError> {
        self.store.save(&state)?;
        Ok(self.current.insert(state))
    }
}
