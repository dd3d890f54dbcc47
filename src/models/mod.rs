//! Data structures for the tennis scoreboard: sides, teams, points, match state.

mod match_state;
mod point;
mod side;
mod team;

pub use match_state::{
    GameScore, MatchConfig, MatchId, MatchState, SetScore, TiebreakScore, GAMES_PER_SET,
};
pub use point::{PointEvent, PointId};
pub use side::{Side, SidePair};
pub use team::{Player, Team};
