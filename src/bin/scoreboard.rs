//! Command-line scoreboard: keeps one match in a data directory and applies one action per run.
//! Run with: cargo run --bin scoreboard -- new "Ana" "Bia"
//! Data directory comes from --data-dir, else SCOREBOARD_DATA_DIR, else `.scoreboard`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tennis_scoreboard::{
    compute_stats, format_time, get_point_display, set_result_line, Config, MatchId,
    MatchSession, MatchState, MatchStore, SessionError, Side, SystemClock,
};

/// Tennis scoreboard
#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Score a tennis match from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the current match and the match history
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new match (replaces any match in progress)
    New {
        left: String,
        right: String,
        /// Sets needed to win (2 = best of 3, 3 = best of 5)
        #[arg(long)]
        sets: Option<u32>,
    },
    /// Start the match clock
    Start,
    /// Award a point to a side
    Point { side: Side },
    /// Undo the last point
    Undo,
    /// Show the current score
    Show,
    /// Show point statistics
    Stats,
    /// Edit a team's names or color
    Team {
        side: Side,
        name: String,
        #[arg(long)]
        partner: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Finish the match and archive it
    Finish,
    /// List finished matches
    History,
    /// Delete one finished match from history
    HistoryDelete { id: MatchId },
    /// Delete all finished matches
    HistoryClear,
    /// Drop the current match without archiving it
    Discard,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    log::debug!("Using data directory {}", config.data_dir.display());

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), SessionError> {
    let store = MatchStore::new(&config.data_dir);
    let mut session = MatchSession::resume(store, SystemClock);

    match command {
        Command::New { left, right, sets } => {
            let sets = sets.unwrap_or(config.sets_to_win);
            print_match(session.new_match(&left, &right, sets)?);
        }
        Command::Start => print_match(session.start()?),
        Command::Point { side } => print_match(session.point(side)?),
        Command::Undo => print_match(session.undo()?),
        Command::Show => print_match(session.current().ok_or(SessionError::NoMatch)?),
        Command::Stats => print_stats(session.current().ok_or(SessionError::NoMatch)?),
        Command::Team {
            side,
            name,
            partner,
            color,
        } => {
            let current = session.current().ok_or(SessionError::NoMatch)?;
            let team = current.team(side).edited(name, partner, color);
            print_match(session.set_team(side, team)?);
        }
        Command::Finish => {
            let archived = session.finish()?;
            println!("Finished: {}", summary_line(&archived));
        }
        Command::History => {
            let history = session.store().load_history();
            if history.is_empty() {
                println!("No finished matches");
            }
            for m in &history {
                let date = m
                    .finished_at
                    .or(m.match_start_time)
                    .map(|t| t.format("%d/%m/%y %H:%M").to_string())
                    .unwrap_or_default();
                println!("{}  {}  {}", m.id, date, summary_line(m));
            }
        }
        Command::HistoryDelete { id } => {
            if session.store().delete_from_history(id)? {
                println!("Deleted {}", id);
            } else {
                println!("No match {} in history", id);
            }
        }
        Command::HistoryClear => session.store().clear_history()?,
        Command::Discard => session.discard()?,
    }
    Ok(())
}

fn summary_line(m: &MatchState) -> String {
    let winner = match m.winner {
        Some(side) => format!(" (winner: {})", m.team(side).display_name()),
        None => String::new(),
    };
    format!(
        "{} vs {}  {}  {}{}",
        m.left_team.display_name(),
        m.right_team.display_name(),
        set_result_line(m),
        format_time(m.elapsed_time),
        winner
    )
}

fn print_match(m: &MatchState) {
    println!(
        "{} vs {}",
        m.left_team.display_name(),
        m.right_team.display_name()
    );
    println!("Sets:  {}", set_result_line(m));
    if let Some(side) = m.winner {
        println!("Winner: {}", m.team(side).display_name());
    } else if !m.is_match_started {
        println!("Not started");
    } else {
        let (label, score) = if m.is_tiebreak {
            ("Tiebreak", &m.tiebreak_score)
        } else {
            ("Game", &m.game_score)
        };
        println!(
            "{}:  {} - {}",
            label,
            get_point_display(score.left, score.right, m.is_tiebreak),
            get_point_display(score.right, score.left, m.is_tiebreak)
        );
    }
    println!("Time:  {}", format_time(m.elapsed_time));
}

fn print_stats(m: &MatchState) {
    let stats = compute_stats(m);
    println!("Total points: {}", stats.total_points);
    for side in Side::ALL {
        println!(
            "{}: {}",
            m.team(side).display_name(),
            stats.points_for(side)
        );
    }
    for p in &stats.points_by_minute {
        println!(
            "{:>5}  {:<5}  {}-{}  games {}-{}",
            p.minute,
            p.event.team,
            p.event.game_score.left,
            p.event.game_score.right,
            p.event.set_score.left,
            p.event.set_score.right
        );
    }
}
