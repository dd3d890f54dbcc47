//! Derived statistics over the point log.

use crate::logic::display::format_minute;
use crate::models::{MatchState, PointEvent, Side};
use serde::Serialize;

/// A logged point with the minute of the match it was played in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutePoint {
    #[serde(flatten)]
    pub event: PointEvent,
    /// e.g. "12′".
    pub minute: String,
}

/// Point counts for a match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total_points: usize,
    pub left_points_count: usize,
    pub right_points_count: usize,
    pub points_by_minute: Vec<MinutePoint>,
}

impl MatchStats {
    pub fn points_for(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left_points_count,
            Side::Right => self.right_points_count,
        }
    }
}

pub fn compute_stats(state: &MatchState) -> MatchStats {
    let history = &state.point_history;
    let count_for = |side: Side| history.iter().filter(|p| p.team == side).count();

    MatchStats {
        total_points: history.len(),
        left_points_count: count_for(Side::Left),
        right_points_count: count_for(Side::Right),
        points_by_minute: history
            .iter()
            .map(|p| MinutePoint {
                event: p.clone(),
                minute: format_minute(p.timestamp),
            })
            .collect(),
    }
}
