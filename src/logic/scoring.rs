//! Point application: game, set, tiebreak and match transitions.

use crate::logic::clock::Clock;
use crate::logic::display::get_point_display;
use crate::models::{MatchState, PointEvent, SetScore, Side, SidePair, TiebreakScore};

/// Points needed to win a regular game (with a two point margin).
const POINTS_TO_WIN_GAME: u32 = 4;

/// Points needed to win a tiebreak (with a two point margin).
const POINTS_TO_WIN_TIEBREAK: u32 = 7;

/// Margin required to close a game, a tiebreak or a set.
const WINNING_MARGIN: u32 = 2;

/// Award one point to `side` and return the resulting state.
///
/// Unstarted and finished matches are returned unchanged. The point is logged with the
/// score as displayed before it was played.
///
/// 1. Regular game: won at 4+ points with a 2 point lead (advantage scoring).
/// 2. A game won at 6-6 starts a tiebreak; otherwise 6+ games with a 2 game lead wins the set.
/// 3. Tiebreak: won at 7+ points with a 2 point lead and recorded as a 7-6 set.
/// 4. After a set: the match ends once the side has won `sets_to_win` sets, else a new set starts.
pub fn apply_point(state: &MatchState, side: Side, clock: &impl Clock) -> MatchState {
    if state.is_match_finished || !state.is_match_started {
        return state.clone();
    }

    let mut next = state.clone();
    next.point_history.push(record_point(state, side));

    if state.is_tiebreak {
        apply_tiebreak_point(&mut next, side, clock);
    } else {
        apply_game_point(&mut next, side, clock);
    }
    next
}

fn record_point(state: &MatchState, side: Side) -> PointEvent {
    let score = if state.is_tiebreak {
        &state.tiebreak_score
    } else {
        &state.game_score
    };
    let game_score = SidePair::new(
        get_point_display(score.left, score.right, state.is_tiebreak),
        get_point_display(score.right, score.left, state.is_tiebreak),
    );
    PointEvent::new(
        side,
        state.elapsed_time,
        game_score,
        state.current_set_score().clone(),
    )
}

fn leads_by_margin(score: &SidePair<u32>, side: Side, minimum: u32) -> bool {
    let own = score[side];
    let other = score[side.opponent()];
    own >= minimum && own >= other + WINNING_MARGIN
}

fn apply_game_point(state: &mut MatchState, side: Side, clock: &impl Clock) {
    state.game_score[side] += 1;
    if !leads_by_margin(&state.game_score, side, POINTS_TO_WIN_GAME) {
        return;
    }

    let current = state.current_set;
    state.sets[current][side] += 1;
    state.game_score = SidePair::default();
    log::debug!(
        "Game to {} in match {} (set {}: {}-{})",
        side,
        state.id,
        current + 1,
        state.sets[current].left,
        state.sets[current].right
    );

    let set = &state.sets[current];
    if set.left == state.games_per_set && set.right == state.games_per_set {
        state.is_tiebreak = true;
        state.tiebreak_score = TiebreakScore::default();
        log::debug!("Tiebreak in set {} of match {}", current + 1, state.id);
    } else if leads_by_margin(set, side, state.games_per_set) {
        close_set(state, side, clock);
    }
}

fn apply_tiebreak_point(state: &mut MatchState, side: Side, clock: &impl Clock) {
    state.tiebreak_score[side] += 1;
    if !leads_by_margin(&state.tiebreak_score, side, POINTS_TO_WIN_TIEBREAK) {
        return;
    }

    let current = state.current_set;
    state.sets[current][side] += 1;
    close_set(state, side, clock);

    state.is_tiebreak = false;
    state.tiebreak_score = TiebreakScore::default();
    state.game_score = SidePair::default();
}

/// `side` has just won the current set: finish the match or open the next set.
fn close_set(state: &mut MatchState, side: Side, clock: &impl Clock) {
    let sets_won = state.sets_won(side);
    log::info!(
        "Set {} to {} in match {} ({} of {} needed)",
        state.current_set + 1,
        side,
        state.id,
        sets_won,
        state.sets_to_win
    );

    if sets_won >= state.sets_to_win {
        state.is_match_finished = true;
        state.winner = Some(side);
        state.match_end_time = Some(clock.now());
        log::info!("Match {} won by {}", state.id, side);
    } else {
        state.sets.push(SetScore::default());
        state.current_set += 1;
    }
}
