//! Undo of the last point by replaying the point log.

use crate::logic::clock::Clock;
use crate::logic::scoring::apply_point;
use crate::logic::setup::create_match;
use crate::models::MatchState;

/// Remove the last point and rebuild the score from the remaining log.
///
/// No-op when nothing has been played or the match has not started. The rebuilt match
/// keeps the id, start time and elapsed time, and the stored point events are kept as
/// they were recorded. Only the primary player names survive the rebuild: partners and
/// colors set after creation are dropped.
pub fn undo_last_point(state: &MatchState, clock: &impl Clock) -> MatchState {
    if state.point_history.is_empty() || !state.is_match_started {
        return state.clone();
    }

    let mut history = state.point_history.clone();
    let undone = history.pop();

    let mut rebuilt = create_match(
        &state.left_team.player1.name,
        &state.right_team.player1.name,
        state.sets_to_win,
    );
    rebuilt.id = state.id;
    rebuilt.is_match_started = true;
    rebuilt.match_start_time = state.match_start_time;
    rebuilt.elapsed_time = state.elapsed_time;

    let replayed = history
        .iter()
        .fold(rebuilt, |acc, event| apply_point(&acc, event.team, clock));

    if let Some(point) = undone {
        log::debug!(
            "Undid point {} ({}) in match {}, replayed {} points",
            point.id,
            point.team,
            state.id,
            history.len()
        );
    }

    MatchState {
        point_history: history,
        ..replayed
    }
}
