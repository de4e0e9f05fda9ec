//! Helpers for building match states in domain tests.

use crate::domain::match_play::{start_match, HoleSubmission, TeamsSpec};
use crate::domain::player::{Player, PlayerId};
use crate::domain::points::Points;
use crate::domain::rules::GameConfig;
use crate::domain::state::{HoleRecord, MatchState};

pub fn make_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player::new(i as PlayerId, format!("P{i}"), 10.0).unwrap())
        .collect()
}

/// Match with identity seating (player 0 captains hole 1) and defaults for
/// the roster size.
pub fn make_match(count: usize) -> MatchState {
    let config = GameConfig::for_players(count).unwrap();
    let seating: Vec<PlayerId> = (0..count as PlayerId).collect();
    start_match(config, make_players(count), Some(seating), 0).unwrap()
}

pub fn make_match_with_config(config: GameConfig) -> MatchState {
    let count = config.player_count;
    let seating: Vec<PlayerId> = (0..count as PlayerId).collect();
    start_match(config, make_players(count), Some(seating), 0).unwrap()
}

/// Overwrite running totals (indexed by player id) for standings-sensitive
/// tests.
pub fn set_points(state: &mut MatchState, quarters: &[i64]) {
    for (player, &q) in state.players.iter_mut().zip(quarters.iter()) {
        player.points = Points::from_quarters(q);
    }
}

/// Commit the current hole as captain-plus-next partners with the given
/// strokes; panics on any rule error (tests submit legal holes).
pub fn quick_commit(state: &mut MatchState, scores: Vec<u32>) -> HoleRecord {
    let captain = state.hole.as_ref().unwrap().captain();
    let second = state.hole.as_ref().unwrap().rotation_order[1];
    let submission = HoleSubmission {
        hole_number: state.current_hole,
        scores,
        rotation_order: None,
        captain_index: None,
        winner: None,
        teams: Some(TeamsSpec::Partners {
            team_one: vec![captain, second],
            team_two: None,
        }),
        final_wager: None,
    };
    crate::domain::match_play::commit_hole(state, &submission).unwrap()
}

/// Strokes vector where `winners` shoot 4 and everyone else shoots 5.
pub fn strokes_where_win(count: usize, winners: &[PlayerId]) -> Vec<u32> {
    (0..count as PlayerId)
        .map(|p| if winners.contains(&p) { 4 } else { 5 })
        .collect()
}

/// Strokes vector where everyone shoots the same score (a push).
pub fn strokes_push(count: usize) -> Vec<u32> {
    vec![5; count]
}
