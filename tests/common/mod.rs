//! Shared helpers for the integration tests.

#![allow(dead_code)]

use tennis_scoreboard::{apply_point, create_match, start_match, FixedClock, MatchState, Side};

pub const START_MS: i64 = 1_700_000_000_000;

pub fn clock() -> FixedClock {
    FixedClock::at_millis(START_MS)
}

/// A started singles match between "Ana" and "Bia".
pub fn started_match(sets_to_win: u32) -> MatchState {
    start_match(&create_match("Ana", "Bia", sets_to_win), &clock())
}

pub fn play(state: &MatchState, side: Side, points: usize) -> MatchState {
    (0..points).fold(state.clone(), |s, _| apply_point(&s, side, &clock()))
}

pub fn win_game(state: &MatchState, side: Side) -> MatchState {
    play(state, side, 4)
}

pub fn win_games(state: &MatchState, side: Side, games: usize) -> MatchState {
    (0..games).fold(state.clone(), |s, _| win_game(&s, side))
}

/// Alternate games from 0-0 in the current set up to 6-6.
pub fn to_six_all(state: &MatchState) -> MatchState {
    (0..6).fold(state.clone(), |s, _| {
        let s = win_game(&s, Side::Left);
        win_game(&s, Side::Right)
    })
}
