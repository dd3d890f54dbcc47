//! Text helpers for presenting scores and times.

use crate::models::MatchState;

/// Tennis call for a point count.
const POINT_CALLS: [&str; 5] = ["0", "15", "30", "40", "AD"];

/// Display for one side's game points.
///
/// Tiebreak points are shown as plain numbers. From 3-3 on, a tied score is "40" for both
/// and the side ahead shows "AD".
pub fn get_point_display(points: u32, opponent_points: u32, is_tiebreak: bool) -> String {
    if is_tiebreak {
        return points.to_string();
    }

    if points >= 3 && opponent_points >= 3 {
        return if points > opponent_points { "AD" } else { "40" }.to_string();
    }

    POINT_CALLS
        .get(points as usize)
        .map(|s| s.to_string())
        .unwrap_or_else(|| points.to_string())
}

/// `MM:SS` from milliseconds. Minutes are not wrapped at 60.
pub fn format_time(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Whole minutes elapsed, e.g. "3′".
pub fn format_minute(milliseconds: u64) -> String {
    format!("{}′", milliseconds / 60_000)
}

/// Games of every set so far, e.g. "6-4 3-6 2-1".
pub fn set_result_line(state: &MatchState) -> String {
    state
        .sets
        .iter()
        .map(|s| format!("{}-{}", s.left, s.right))
        .collect::<Vec<_>>()
        .join(" ")
}
