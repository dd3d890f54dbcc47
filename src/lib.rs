//! Tennis scoreboard: match scoring engine with replay undo, persistence and a session owner.

pub mod config;
pub mod logic;
pub mod models;
pub mod session;
pub mod storage;

pub use config::Config;
pub use logic::{
    apply_point, compute_stats, create_match, finish, format_minute, format_time,
    get_point_display, set_result_line, set_team, start_match, tick, undo_last_point, Clock,
    FixedClock, MatchStats, MinutePoint, SystemClock,
};
pub use models::{
    GameScore, MatchConfig, MatchId, MatchState, Player, PointEvent, PointId, SetScore, Side,
    SidePair, Team, TiebreakScore, GAMES_PER_SET,
};
pub use session::{MatchSession, SessionError};
pub use storage::{MatchStore, StorageError, HISTORY_LIMIT};
