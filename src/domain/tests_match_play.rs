use crate::domain::match_play::{
    commit_hole, next_rotation_preview, start_match, HoleSubmission, TeamsSpec,
};
use crate::domain::player::PlayerId;
use crate::domain::points::Points;
use crate::domain::rules::GameConfig;
use crate::domain::state::{HoleWinner, MatchStatus, SoloStyle, TeamSide, Teams};
use crate::domain::teams::{accept_partner, request_partner};
use crate::domain::test_state_helpers::{
    make_match, make_players, quick_commit, strokes_push, strokes_where_win,
};
use crate::domain::wager::players_missing_solo;
use crate::errors::domain::ViolationKind;

fn partners_submission(hole_number: u8, scores: Vec<u32>) -> HoleSubmission {
    HoleSubmission {
        hole_number,
        scores,
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Partners {
            team_one: vec![0, 1],
            team_two: None,
        }),
        final_wager: None,
    }
}

#[test]
fn seating_must_be_a_permutation() {
    let config = GameConfig::for_players(4).unwrap();
    let err = start_match(config, make_players(4), Some(vec![0, 1, 2, 2]), 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn roster_must_match_the_config() {
    let config = GameConfig::for_players(5).unwrap();
    let err = start_match(config, make_players(4), None, 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn commit_applies_points_and_opens_the_next_hole() {
    let mut state = make_match(4);
    let record = commit_hole(&mut state, &partners_submission(1, strokes_where_win(4, &[0])))
        .unwrap();

    assert_eq!(record.hole_number, 1);
    assert_eq!(record.winner, HoleWinner::Side(TeamSide::TeamOne));
    assert_eq!(record.final_wager, 1);
    assert_eq!(
        record.points_delta,
        vec![
            Points::from_quarters(1),
            Points::from_quarters(1),
            Points::from_quarters(-1),
            Points::from_quarters(-1),
        ]
    );
    assert_eq!(state.standings(), record.points_delta);
    assert_eq!(state.current_hole, 2);
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(hole.rotation_order, vec![1, 2, 3, 0]);
    assert_eq!(hole.captain(), 1);
    assert_eq!(state.record_for(1), Some(&record));
}

#[test]
fn submissions_target_the_live_hole() {
    let mut state = make_match(4);
    let err = commit_hole(&mut state, &partners_submission(3, strokes_push(4))).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Sequence));
}

#[test]
fn rotation_and_captain_cross_checks_must_agree() {
    let mut state = make_match(4);
    let mut submission = partners_submission(1, strokes_where_win(4, &[0]));
    submission.rotation_order = Some(vec![1, 0, 2, 3]);
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));

    let mut submission = partners_submission(1, strokes_where_win(4, &[0]));
    submission.captain_index = Some(2);
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));

    let mut submission = partners_submission(1, strokes_where_win(4, &[0]));
    submission.rotation_order = Some(vec![0, 1, 2, 3]);
    submission.captain_index = Some(0);
    commit_hole(&mut state, &submission).unwrap();
}

#[test]
fn winner_cross_check_must_agree() {
    let mut state = make_match(4);
    let mut submission = partners_submission(1, strokes_where_win(4, &[0]));
    submission.winner = Some(HoleWinner::Side(TeamSide::TeamTwo));
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));

    submission.winner = Some(HoleWinner::Side(TeamSide::TeamOne));
    commit_hole(&mut state, &submission).unwrap();
}

#[test]
fn wager_cross_check_must_agree() {
    let mut state = make_match(4);
    let mut submission = partners_submission(1, strokes_where_win(4, &[0]));
    submission.final_wager = Some(3);
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn submitted_teams_defer_to_prior_actions() {
    let mut state = make_match(4);
    request_partner(&mut state, 0, 2).unwrap();
    accept_partner(&mut state, 2).unwrap();
    let err = commit_hole(&mut state, &partners_submission(1, strokes_push(4))).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn listed_team_two_must_be_the_complement() {
    let mut state = make_match(4);
    let submission = HoleSubmission {
        hole_number: 1,
        scores: strokes_push(4),
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Partners {
            team_one: vec![0, 1],
            team_two: Some(vec![2]),
        }),
        final_wager: None,
    };
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn team_one_must_include_the_captain() {
    let mut state = make_match(4);
    let submission = HoleSubmission {
        hole_number: 1,
        scores: strokes_push(4),
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Partners {
            team_one: vec![1, 2],
            team_two: None,
        }),
        final_wager: None,
    };
    let err = commit_hole(&mut state, &submission).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn scores_are_length_and_range_checked() {
    let mut state = make_match(4);
    let err = commit_hole(&mut state, &partners_submission(1, vec![4, 5, 6])).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));

    let mut state = make_match(4);
    let err = commit_hole(&mut state, &partners_submission(1, vec![4, 5, 6, 0])).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn solo_submission_counts_toward_the_requirement() {
    let mut state = make_match(4);
    assert_eq!(players_missing_solo(&state), vec![0, 1, 2, 3]);

    let submission = HoleSubmission {
        hole_number: 1,
        scores: strokes_where_win(4, &[0]),
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Solo {
            soloist: 0,
            declaration: None,
        }),
        final_wager: None,
    };
    let record = commit_hole(&mut state, &submission).unwrap();
    assert_eq!(
        record.teams,
        Teams::Solo {
            soloist: 0,
            opponents: vec![1, 2, 3],
        }
    );
    // A plain solo doubles the stake.
    assert_eq!(record.final_wager, 2);
    assert_eq!(state.players[0].solo_count, 1);
    assert_eq!(players_missing_solo(&state), vec![1, 2, 3]);
}

#[test]
fn duncan_submission_routes_through_the_declaration() {
    let mut state = make_match(4);
    let submission = HoleSubmission {
        hole_number: 1,
        scores: strokes_where_win(4, &[0]),
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Solo {
            soloist: 0,
            declaration: Some(SoloStyle::Duncan),
        }),
        final_wager: None,
    };
    let record = commit_hole(&mut state, &submission).unwrap();
    // Duncan wins pay 3-for-2 on the undoubled stake.
    assert_eq!(record.final_wager, 1);
    assert_eq!(record.points_delta[0], Points::from_ratio(3, 2));
}

#[test]
fn next_rotation_preview_matches_the_committed_rotation() {
    let mut state = make_match(4);
    let (order, captain) = next_rotation_preview(&state).unwrap();
    assert_eq!(order, vec![1, 2, 3, 0]);
    assert_eq!(captain, 1);

    quick_commit(&mut state, strokes_where_win(4, &[0]));
    assert_eq!(state.hole.as_ref().unwrap().rotation_order, order);
}

#[test]
fn full_round_completes_and_stays_zero_sum() {
    let mut state = make_match(4);
    let mut winner: PlayerId = 0;
    for _ in 0..18 {
        quick_commit(&mut state, strokes_where_win(4, &[winner]));
        winner = (winner + 1) % 4;
    }

    assert_eq!(state.status, MatchStatus::Completed);
    assert!(state.hole.is_none());
    assert_eq!(state.hole_history.len(), 18);
    assert!(state.standings().into_iter().sum::<Points>().is_zero());

    let err = commit_hole(&mut state, &partners_submission(19, strokes_push(4))).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Sequence));
}

#[test]
fn carried_push_resolves_at_the_doubled_stake() {
    let mut state = make_match(4);
    quick_commit(&mut state, strokes_push(4));
    let record = quick_commit(&mut state, strokes_where_win(4, &[1]));
    // Hole 1 pushed at 1; hole 2 decides both holes at 2.
    assert_eq!(record.final_wager, 2);
    assert_eq!(record.points_delta[1], Points::from_quarters(2));
}
