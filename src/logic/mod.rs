//! Match engine: pure transitions over `MatchState` plus display helpers.

mod clock;
mod display;
mod scoring;
mod setup;
mod stats;
mod undo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{format_minute, format_time, get_point_display, set_result_line};
pub use scoring::apply_point;
pub use setup::{create_match, finish, set_team, start_match, tick};
pub use stats::{compute_stats, MatchStats, MinutePoint};
pub use undo::undo_last_point;
