//! Integration tests for JSON persistence of the current match and history.

mod common;

use common::{clock, play, started_match, to_six_all};
use std::fs;
use tennis_scoreboard::{set_team, MatchStore, Side, SidePair, Team, HISTORY_LIMIT};

fn store() -> (tempfile::TempDir, MatchStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = MatchStore::new(dir.path().join("data"));
    (dir, store)
}

#[test]
fn load_without_saved_match_is_none() {
    let (_dir, store) = store();
    assert!(store.load().is_none());
}

#[test]
fn saved_match_loads_back_unchanged() {
    let (_dir, store) = store();
    let m = play(&started_match(2), Side::Left, 5);
    let m = set_team(&m, Side::Right, Team::doubles("Bia", "Duda").with_color("#8B5CF6"));
    store.save(&m).unwrap();
    assert_eq!(store.load(), Some(m));
}

#[test]
fn snapshot_uses_camel_case_fields() {
    let (_dir, store) = store();
    store.save(&started_match(2)).unwrap();
    let text = fs::read_to_string(store.dir().join("current_match.json")).unwrap();
    assert!(text.contains("\"leftTeam\""));
    assert!(text.contains("\"pointHistory\""));
    assert!(text.contains("\"isTiebreak\""));
}

#[test]
fn corrupt_snapshot_is_discarded() {
    let (_dir, store) = store();
    fs::create_dir_all(store.dir()).unwrap();
    let path = store.dir().join("current_match.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(store.load().is_none());
    assert!(!path.exists());
}

#[test]
fn snapshot_without_player_names_is_discarded() {
    let (_dir, store) = store();
    let m = set_team(&started_match(2), Side::Left, Team::singles(""));
    store.save(&m).unwrap();
    assert!(store.load().is_none());
    assert!(!store.dir().join("current_match.json").exists());
}

#[test]
fn clear_removes_the_snapshot_and_tolerates_missing_file() {
    let (_dir, store) = store();
    store.save(&started_match(2)).unwrap();
    store.clear().unwrap();
    assert!(store.load().is_none());
    store.clear().unwrap();
}

#[test]
fn history_is_most_recent_first() {
    let (_dir, store) = store();
    let first = started_match(2);
    let second = started_match(3);
    store.save_to_history(&first, &clock()).unwrap();
    store.save_to_history(&second, &clock()).unwrap();

    let history = store.load_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
    assert!(history.iter().all(|m| m.finished_at == Some(clock().0)));
}

#[test]
fn archiving_the_same_match_twice_keeps_one_entry() {
    let (_dir, store) = store();
    let m = started_match(2);
    store.save_to_history(&m, &clock()).unwrap();
    store.save_to_history(&play(&m, Side::Left, 1), &clock()).unwrap();
    let history = store.load_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].point_history.len(), 1);
}

#[test]
fn history_is_capped() {
    let (_dir, store) = store();
    let matches: Vec<_> = (0..HISTORY_LIMIT + 3).map(|_| started_match(2)).collect();
    for m in &matches {
        store.save_to_history(m, &clock()).unwrap();
    }
    let history = store.load_history();
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].id, matches.last().unwrap().id);
}

#[test]
fn delete_and_clear_history() {
    let (_dir, store) = store();
    let a = started_match(2);
    let b = started_match(2);
    store.save_to_history(&a, &clock()).unwrap();
    store.save_to_history(&b, &clock()).unwrap();

    assert!(store.delete_from_history(a.id).unwrap());
    assert!(!store.delete_from_history(a.id).unwrap());
    let history = store.load_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, b.id);

    store.clear_history().unwrap();
    assert!(store.load_history().is_empty());
}

#[test]
fn corrupt_history_reads_as_empty() {
    let (_dir, store) = store();
    fs::create_dir_all(store.dir()).unwrap();
    fs::write(store.dir().join("match_history.json"), "[1, 2").unwrap();
    assert!(store.load_history().is_empty());
}

#[test]
fn snapshot_with_current_set_past_the_sets_is_discarded() {
    let (_dir, store) = store();
    let mut m = started_match(2);
    m.current_set = 3;
    store.save(&m).unwrap();
    assert!(store.load().is_none());
    assert!(!store.dir().join("current_match.json").exists());
}

#[test]
fn snapshot_without_sets_is_discarded() {
    let (_dir, store) = store();
    let mut m = started_match(2);
    m.sets.clear();
    store.save(&m).unwrap();
    assert!(store.load().is_none());
}

#[test]
fn snapshot_with_game_score_during_tiebreak_is_discarded() {
    let (_dir, store) = store();
    let mut m = to_six_all(&started_match(2));
    m.game_score = SidePair::new(2, 1);
    store.save(&m).unwrap();
    assert!(store.load().is_none());
}

#[test]
fn snapshot_finished_without_winner_is_discarded() {
    let (_dir, store) = store();
    let mut m = started_match(2);
    m.is_match_finished = true;
    store.save(&m).unwrap();
    assert!(store.load().is_none());
}

#[test]
fn tiebreak_snapshot_loads_back() {
    let (_dir, store) = store();
    let m = play(&to_six_all(&started_match(2)), Side::Right, 3);
    store.save(&m).unwrap();
    assert_eq!(store.load(), Some(m));
}
