//! PointEvent: one entry of the append-only point log.

use crate::models::side::{Side, SidePair};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a point.
pub type PointId = Uuid;

/// A point awarded to one side, with the score as it was displayed when it was played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEvent {
    pub id: PointId,
    /// Side the point was awarded to.
    pub team: Side,
    /// Milliseconds since match start.
    pub timestamp: u64,
    /// Game (or tiebreak) score display before this point.
    pub game_score: SidePair<String>,
    /// Games in the current set before this point.
    pub set_score: SidePair<u32>,
}

impl PointEvent {
    pub fn new(
        team: Side,
        timestamp: u64,
        game_score: SidePair<String>,
        set_score: SidePair<u32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team,
            timestamp,
            game_score,
            set_score,
        }
    }
}
