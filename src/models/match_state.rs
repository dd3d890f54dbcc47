//! MatchState: the full snapshot of a match, plus MatchConfig.

use crate::models::point::PointEvent;
use crate::models::side::{Side, SidePair};
use crate::models::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Points won in the current game (0, 1, 2, 3 = "0", "15", "30", "40").
pub type GameScore = SidePair<u32>;

/// Games won by each side in one set.
pub type SetScore = SidePair<u32>;

/// Points won in the current tiebreak.
pub type TiebreakScore = SidePair<u32>;

/// Games needed to take a set (and the 6-6 tiebreak trigger).
pub const GAMES_PER_SET: u32 = 6;

/// Match settings as chosen on setup.
///
/// Only `sets_to_win` reaches the engine. Scoring is always advantage scoring, whatever
/// `advantage_rule` says.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub sets_to_win: u32,
    pub games_per_set: u32,
    pub use_tiebreak: bool,
    pub advantage_rule: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sets_to_win: 2,
            games_per_set: GAMES_PER_SET,
            use_tiebreak: true,
            advantage_rule: true,
        }
    }
}

/// Authoritative state of one match.
///
/// Values are never changed in place by the engine: every transition returns a new
/// `MatchState`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub id: MatchId,
    pub left_team: Team,
    pub right_team: Team,
    pub game_score: GameScore,
    /// One entry per set played so far, the last one being the set in progress.
    pub sets: Vec<SetScore>,
    /// Index into `sets` of the set in progress.
    pub current_set: usize,
    pub is_match_started: bool,
    pub is_match_finished: bool,
    pub match_start_time: Option<DateTime<Utc>>,
    pub match_end_time: Option<DateTime<Utc>>,
    /// Milliseconds since the match started, as last reported by the caller's timer.
    pub elapsed_time: u64,
    pub point_history: Vec<PointEvent>,
    pub winner: Option<Side>,
    pub sets_to_win: u32,
    pub games_per_set: u32,
    pub is_tiebreak: bool,
    pub tiebreak_score: TiebreakScore,
    /// Set when the match is archived to history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl MatchState {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Left => &self.left_team,
            Side::Right => &self.right_team,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Left => &mut self.left_team,
            Side::Right => &mut self.right_team,
        }
    }

    /// Score of the set in progress (or the final set once the match is over).
    pub fn current_set_score(&self) -> &SetScore {
        &self.sets[self.current_set]
    }

    /// Sets won by `side`: more games than the opponent and at least `games_per_set`.
    /// A tiebreak set is recorded as 7-6 and so counts as well.
    pub fn sets_won(&self, side: Side) -> u32 {
        let opponent = side.opponent();
        self.sets
            .iter()
            .filter(|s| s[side] > s[opponent] && s[side] >= self.games_per_set)
            .count() as u32
    }

    /// True when both teams have a second player.
    pub fn is_doubles(&self) -> bool {
        self.left_team.is_doubles() && self.right_team.is_doubles()
    }

    /// Both teams carry a primary player name. Snapshots failing this are not usable.
    pub fn has_named_teams(&self) -> bool {
        !self.left_team.player1.name.is_empty() && !self.right_team.player1.name.is_empty()
    }

    /// The score invariants hold: the set in progress is the last entry of `sets`, a winner
    /// exists exactly when the match is finished, and no game is in progress during a tiebreak.
    pub fn is_consistent(&self) -> bool {
        !self.sets.is_empty()
            && self.sets.len() == self.current_set + 1
            && self.winner.is_some() == self.is_match_finished
            && (!self.is_tiebreak || self.game_score == GameScore::default())
    }
}
