//! Match lifecycle outside of scoring: creation, start, timer, team edits, archiving.

use crate::logic::clock::Clock;
use crate::models::{GameScore, MatchState, SetScore, Side, Team, TiebreakScore, GAMES_PER_SET};
use uuid::Uuid;

/// Separator used when both doubles names are typed into one field.
const DOUBLES_SEPARATOR: &str = " / ";

/// Create a fresh, unstarted match with one empty set.
///
/// `sets_to_win` is used as given (2 for best-of-3, 3 for best-of-5). A name of the form
/// "A / B" keeps only "A"; partners are added with [`set_team`].
pub fn create_match(left_name: &str, right_name: &str, sets_to_win: u32) -> MatchState {
    let state = MatchState {
        id: Uuid::new_v4(),
        left_team: Team::singles(primary_name(left_name)),
        right_team: Team::singles(primary_name(right_name)),
        game_score: GameScore::default(),
        sets: vec![SetScore::default()],
        current_set: 0,
        is_match_started: false,
        is_match_finished: false,
        match_start_time: None,
        match_end_time: None,
        elapsed_time: 0,
        point_history: Vec::new(),
        winner: None,
        sets_to_win,
        games_per_set: GAMES_PER_SET,
        is_tiebreak: false,
        tiebreak_score: TiebreakScore::default(),
        finished_at: None,
    };
    log::debug!(
        "Created match {} ({} vs {}, first to {} sets)",
        state.id,
        state.left_team.player1.name,
        state.right_team.player1.name,
        sets_to_win
    );
    state
}

fn primary_name(name: &str) -> &str {
    name.split(DOUBLES_SEPARATOR).next().unwrap_or(name)
}

/// Start the match clock. Already-started matches are returned unchanged.
pub fn start_match(state: &MatchState, clock: &impl Clock) -> MatchState {
    if state.is_match_started {
        return state.clone();
    }
    let now = clock.now();
    log::info!("Match {} started", state.id);
    MatchState {
        is_match_started: true,
        match_start_time: Some(now),
        ..state.clone()
    }
}

/// Refresh `elapsed_time` from the start time. No-op unless the match is running.
pub fn tick(state: &MatchState, clock: &impl Clock) -> MatchState {
    let start = match state.match_start_time {
        Some(start) if state.is_match_started && !state.is_match_finished => start,
        _ => return state.clone(),
    };
    let elapsed = (clock.now() - start).num_milliseconds().max(0) as u64;
    MatchState {
        elapsed_time: elapsed,
        ..state.clone()
    }
}

/// Replace one side's team (names, partner, color). Scores are untouched.
pub fn set_team(state: &MatchState, side: Side, team: Team) -> MatchState {
    let mut next = state.clone();
    *next.team_mut(side) = team;
    next
}

/// Stamp the time the match was archived.
pub fn finish(state: &MatchState, clock: &impl Clock) -> MatchState {
    MatchState {
        finished_at: Some(clock.now()),
        ..state.clone()
    }
}
