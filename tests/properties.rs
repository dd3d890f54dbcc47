//! Property tests over random point sequences.

mod common;

use common::{clock, started_match};
use proptest::prelude::*;
use tennis_scoreboard::{apply_point, create_match, undo_last_point, MatchState, Side, SidePair};

fn sides(max_len: usize) -> impl Strategy<Value = Vec<Side>> {
    prop::collection::vec(
        any::<bool>().prop_map(|b| if b { Side::Left } else { Side::Right }),
        0..max_len,
    )
}

fn play_all(state: &MatchState, points: &[Side]) -> MatchState {
    points
        .iter()
        .fold(state.clone(), |s, &side| apply_point(&s, side, &clock()))
}

fn check_invariants(m: &MatchState) -> Result<(), TestCaseError> {
    prop_assert_eq!(m.sets.len(), m.current_set + 1);
    prop_assert_eq!(m.is_match_finished, m.winner.is_some());
    if m.is_tiebreak {
        prop_assert_eq!(&m.game_score, &SidePair::new(0, 0));
    }
    if let Some(winner) = m.winner {
        prop_assert!(m.sets_won(winner) >= m.sets_to_win);
    }
    Ok(())
}

proptest! {
    /// Property: an unstarted match ignores every point
    #[test]
    fn prop_unstarted_match_ignores_points(points in sides(50)) {
        let m = create_match("Ana", "Bia", 2);
        prop_assert_eq!(play_all(&m, &points), m);
    }

    /// Property: invariants hold after every point
    #[test]
    fn prop_invariants_hold(points in sides(400), sets_to_win in 1u32..=3) {
        let mut m = started_match(sets_to_win);
        check_invariants(&m)?;
        for side in points {
            let before = m.point_history.len();
            let finished = m.is_match_finished;
            m = apply_point(&m, side, &clock());
            check_invariants(&m)?;
            let expected = if finished { before } else { before + 1 };
            prop_assert_eq!(m.point_history.len(), expected);
        }
    }

    /// Property: undoing a point returns exactly the previous state
    #[test]
    fn prop_undo_inverts_last_point(points in sides(120), last in any::<bool>()) {
        let before = play_all(&started_match(3), &points);
        prop_assume!(!before.is_match_finished);
        let side = if last { Side::Left } else { Side::Right };
        let after = apply_point(&before, side, &clock());
        prop_assert_eq!(undo_last_point(&after, &clock()), before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: undoing every point returns to the initial score
    #[test]
    fn prop_undo_all_points_resets_score(points in sides(80)) {
        let start = started_match(2);
        let played = play_all(&start, &points);
        let undone = (0..played.point_history.len())
            .fold(played.clone(), |s, _| undo_last_point(&s, &clock()));

        prop_assert!(undone.point_history.is_empty());
        prop_assert!(undone.is_match_started);
        prop_assert!(!undone.is_match_finished);
        prop_assert_eq!(undone.sets, vec![SidePair::new(0, 0)]);
        prop_assert_eq!(undone.current_set, 0);
        prop_assert_eq!(undone.game_score, SidePair::new(0, 0));
        prop_assert!(!undone.is_tiebreak);
        prop_assert_eq!(undone.id, start.id);
    }
}
