use crate::domain::state::{SoloStyle, TeamSide, Teams};
use crate::domain::teams::{
    aardvark_request_team, accept_partner, declare_solo, decline_partner, ensure_formation_final,
    mark_captain_hit, mark_tee_shots_complete, request_partner, respond_to_aardvark,
    AardvarkOutcome,
};
use crate::domain::test_state_helpers::make_match;
use crate::errors::domain::ViolationKind;

#[test]
fn request_accept_forms_partners_with_complement() {
    let mut state = make_match(4);
    request_partner(&mut state, 0, 2).unwrap();
    accept_partner(&mut state, 2).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(
        hole.teams,
        Teams::Partners {
            team_one: vec![0, 2],
            team_two: vec![1, 3],
        }
    );
    assert!(ensure_formation_final(&state).is_ok());
}

#[test]
fn only_the_captain_may_request() {
    let mut state = make_match(4);
    let err = request_partner(&mut state, 1, 2).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Actor));
}

#[test]
fn self_partnering_is_rejected() {
    let mut state = make_match(4);
    let err = request_partner(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));
}

#[test]
fn request_after_deadline_is_rejected() {
    let mut state = make_match(4);
    mark_tee_shots_complete(&mut state).unwrap();
    let err = request_partner(&mut state, 0, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
}

#[test]
fn accept_by_the_wrong_player_is_rejected() {
    let mut state = make_match(4);
    request_partner(&mut state, 0, 2).unwrap();
    let err = accept_partner(&mut state, 3).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Actor));
}

#[test]
fn decline_forces_captain_solo_and_doubles() {
    let mut state = make_match(4);
    request_partner(&mut state, 0, 2).unwrap();
    decline_partner(&mut state, 2).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(
        hole.teams,
        Teams::Solo {
            soloist: 0,
            opponents: vec![1, 2, 3],
        }
    );
    assert!(hole.wager.solo_doubled);
    assert_eq!(hole.wager.effective_wager(), 2);
    assert_eq!(state.players[0].solo_count, 1);
}

#[test]
fn requesting_twice_while_pending_is_rejected() {
    let mut state = make_match(4);
    request_partner(&mut state, 0, 2).unwrap();
    let err = request_partner(&mut state, 0, 3).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
}

#[test]
fn go_solo_doubles_and_counts() {
    let mut state = make_match(4);
    declare_solo(&mut state, 0, SoloStyle::Standard).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert!(hole.wager.solo_doubled);
    assert_eq!(state.players[0].solo_count, 1);
}

#[test]
fn duncan_must_precede_the_captains_shot() {
    let mut state = make_match(4);
    mark_captain_hit(&mut state).unwrap();
    let err = declare_solo(&mut state, 0, SoloStyle::Duncan).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
}

#[test]
fn duncan_sets_declaration_without_doubling() {
    let mut state = make_match(4);
    declare_solo(&mut state, 0, SoloStyle::Duncan).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(hole.wager.declaration, Some(SoloStyle::Duncan));
    assert!(!hole.wager.solo_doubled);
}

#[test]
fn big_dick_is_final_hole_only() {
    let mut state = make_match(4);
    let err = declare_solo(&mut state, 2, SoloStyle::BigDick).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
}

#[test]
fn tunkarri_requires_an_aardvark_match() {
    let mut state = make_match(4);
    let err = declare_solo(&mut state, 3, SoloStyle::Tunkarri).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::PlayerCount));
}

#[test]
fn tunkarri_requires_the_aardvark_slot() {
    let mut state = make_match(5);
    // Player in the leading four cannot declare the Tunkarri.
    let err = declare_solo(&mut state, 1, SoloStyle::Tunkarri).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Actor));

    declare_solo(&mut state, 4, SoloStyle::Tunkarri).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(
        hole.teams,
        Teams::Solo {
            soloist: 4,
            opponents: vec![0, 1, 2, 3],
        }
    );
    assert_eq!(hole.wager.declaration, Some(SoloStyle::Tunkarri));
}

#[test]
fn aardvark_floats_until_joining() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 1).unwrap();
    accept_partner(&mut state, 1).unwrap();
    // Formation is not final while the aardvark floats.
    let err = ensure_formation_final(&state).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::InvalidConfiguration));

    mark_tee_shots_complete(&mut state).unwrap();
    aardvark_request_team(&mut state, 4, TeamSide::TeamTwo).unwrap();
    let outcome = respond_to_aardvark(&mut state, true).unwrap();
    assert_eq!(outcome, AardvarkOutcome::Joined(TeamSide::TeamTwo));

    let hole = state.hole.as_ref().unwrap();
    assert_eq!(
        hole.teams,
        Teams::Partners {
            team_one: vec![0, 1],
            team_two: vec![2, 3, 4],
        }
    );
    assert!(ensure_formation_final(&state).is_ok());
}

#[test]
fn aardvark_requests_need_completed_tee_shots() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 1).unwrap();
    accept_partner(&mut state, 1).unwrap();
    let err = aardvark_request_team(&mut state, 4, TeamSide::TeamOne).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
}

#[test]
fn non_aardvark_cannot_invoke_aardvark_rules() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 1).unwrap();
    accept_partner(&mut state, 1).unwrap();
    mark_tee_shots_complete(&mut state).unwrap();
    let err = aardvark_request_team(&mut state, 2, TeamSide::TeamOne).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Actor));
}

#[test]
fn toss_retargets_and_ping_pong_lands_on_first_choice() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 1).unwrap();
    accept_partner(&mut state, 1).unwrap();
    mark_tee_shots_complete(&mut state).unwrap();
    aardvark_request_team(&mut state, 4, TeamSide::TeamOne).unwrap();

    // Team one tosses: request moves across at doubled stakes.
    let outcome = respond_to_aardvark(&mut state, false).unwrap();
    assert_eq!(
        outcome,
        AardvarkOutcome::Tossed {
            now_asking: TeamSide::TeamTwo
        }
    );
    assert_eq!(state.hole.as_ref().unwrap().wager.tosses, 1);
    assert_eq!(state.hole.as_ref().unwrap().wager.toss_multiplier(), 2);

    // Team two counter-tosses: ping-pong, aardvark lands on team one at 4x.
    let outcome = respond_to_aardvark(&mut state, false).unwrap();
    assert_eq!(outcome, AardvarkOutcome::Joined(TeamSide::TeamOne));
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(hole.wager.tosses, 2);
    assert_eq!(hole.wager.toss_multiplier(), 4);
    assert_eq!(
        hole.teams,
        Teams::Partners {
            team_one: vec![0, 1, 4],
            team_two: vec![2, 3],
        }
    );
}

#[test]
fn response_without_a_pending_request_is_rejected() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 1).unwrap();
    accept_partner(&mut state, 1).unwrap();
    let err = respond_to_aardvark(&mut state, false).unwrap_err();
    assert_eq!(err.kind(), Some(&ViolationKind::Phase));
    assert!(err.to_string().contains("prior toss"));
}

#[test]
fn captain_may_partner_the_aardvark() {
    let mut state = make_match(5);
    request_partner(&mut state, 0, 4).unwrap();
    accept_partner(&mut state, 4).unwrap();
    let hole = state.hole.as_ref().unwrap();
    assert_eq!(
        hole.teams,
        Teams::Partners {
            team_one: vec![0, 4],
            team_two: vec![1, 2, 3],
        }
    );
    assert!(hole.unassigned_aardvarks.is_empty());
}
