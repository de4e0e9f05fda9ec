//! Hole lifecycle on a `MatchState`: opening holes, committing submissions.
//!
//! Pure state-in/state-out orchestration; the service layer adds match
//! lookup, replay detection, and logging on top.

use serde::{Deserialize, Serialize};

use crate::domain::player::{Player, PlayerId};
use crate::domain::rotation::{initial_order, next_order};
use crate::domain::rules::GameConfig;
use crate::domain::scoring::score_hole;
use crate::domain::state::{
    require_hole, require_hole_mut, require_in_progress, HoleRecord, HoleState, HoleWinner,
    MatchState, MatchStatus, SoloStyle, Teams,
};
use crate::domain::teams as formation;
use crate::domain::wager::{opening_wager, refresh_option, settle_carry};
use crate::domain::validate;
use crate::errors::domain::DomainError;

/// Build a fresh match and open hole 1.
pub fn start_match(
    config: GameConfig,
    players: Vec<Player>,
    seating: Option<Vec<PlayerId>>,
    seed: u64,
) -> Result<MatchState, DomainError> {
    if players.len() != config.player_count {
        return Err(DomainError::invalid_configuration(format!(
            "config expects {} players, roster has {}",
            config.player_count,
            players.len()
        )));
    }
    let order = match seating {
        Some(order) => {
            let roster: Vec<PlayerId> = (0..players.len() as u8).collect();
            let mut sorted = order.clone();
            sorted.sort_unstable();
            if sorted != roster {
                return Err(DomainError::invalid_configuration(
                    "seating must be a permutation of the roster",
                ));
            }
            order
        }
        None => initial_order(config.player_count, seed),
    };

    let mut state = MatchState {
        config,
        players,
        status: MatchStatus::InProgress,
        current_hole: 1,
        hole: None,
        carried_stake: None,
        carry_fresh: false,
        carry_blocked: false,
        hole_history: Vec::new(),
    };
    open_hole(&mut state, order);
    Ok(state)
}

/// Open the current hole with the given hitting order.
fn open_hole(state: &mut MatchState, rotation_order: Vec<PlayerId>) {
    let hole_number = state.current_hole;
    let wager = opening_wager(state, hole_number);
    let aardvarks: Vec<PlayerId> = state
        .config
        .aardvark_positions()
        .filter_map(|pos| rotation_order.get(pos).copied())
        .collect();
    state.hole = Some(HoleState {
        hole_number,
        phase: state.config.phase_for_hole(hole_number),
        rotation_order,
        teams: Teams::Pending,
        pending_partner: None,
        unassigned_aardvarks: aardvarks,
        pending_aardvark: None,
        rotation_selected: false,
        captain_has_hit: false,
        tee_shots_complete: false,
        wager,
    });
    refresh_option(state);
}

/// Rotation and captain for the upcoming hole, absent any Goat override.
pub fn next_rotation_preview(
    state: &MatchState,
) -> Result<(Vec<PlayerId>, PlayerId), DomainError> {
    let hole = require_hole(state, "next_rotation_preview")?;
    let order = next_order(&hole.rotation_order);
    let captain = *order.first().ok_or_else(|| {
        DomainError::invalid_configuration("rotation order is empty")
    })?;
    Ok((order, captain))
}

/// Team split supplied with a hole submission; `team_two` may be omitted and
/// is then computed as the validated complement of `team_one`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TeamsSpec {
    Partners {
        team_one: Vec<PlayerId>,
        team_two: Option<Vec<PlayerId>>,
    },
    Solo {
        soloist: PlayerId,
        #[serde(default)]
        declaration: Option<SoloStyle>,
    },
}

/// One hole's worth of results submitted for commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSubmission {
    pub hole_number: u8,
    /// Raw strokes, indexed by `PlayerId`.
    pub scores: Vec<u32>,
    /// Optional cross-check against the hole's actual hitting order.
    #[serde(default)]
    pub rotation_order: Option<Vec<PlayerId>>,
    /// Optional cross-check; must point at the captain within the order.
    #[serde(default)]
    pub captain_index: Option<u8>,
    /// Optional cross-check; must agree with the computed result.
    #[serde(default)]
    pub winner: Option<HoleWinner>,
    /// Teams, for clients that drive formation in one shot rather than via
    /// individual actions. Ignored-with-error if formation already happened.
    #[serde(default)]
    pub teams: Option<TeamsSpec>,
    /// Optional cross-check against the engine's effective wager.
    #[serde(default)]
    pub final_wager: Option<u32>,
}

/// Commit the current hole: score it, apply deltas, append the record, and
/// open the next hole (or finish the match).
pub fn commit_hole(
    state: &mut MatchState,
    submission: &HoleSubmission,
) -> Result<HoleRecord, DomainError> {
    require_in_progress(state, "commit_hole")?;
    if submission.hole_number != state.current_hole {
        return Err(DomainError::sequence(format!(
            "hole {} submitted while hole {} is in progress",
            submission.hole_number, state.current_hole
        )));
    }

    {
        let hole = require_hole(state, "commit_hole")?;
        if let Some(order) = &submission.rotation_order {
            if *order != hole.rotation_order {
                return Err(DomainError::invalid_configuration(format!(
                    "submitted rotation {order:?} disagrees with the hole's order {:?}",
                    hole.rotation_order
                )));
            }
        }
        if let Some(index) = submission.captain_index {
            if hole.rotation_order.get(index as usize) != Some(&hole.captain()) {
                return Err(DomainError::invalid_configuration(format!(
                    "captain index {index} does not point at the captain"
                )));
            }
        }
    }

    if let Some(spec) = &submission.teams {
        adopt_teams(state, spec)?;
    }

    let outcome = score_hole(state, &submission.scores)?;
    if let Some(claimed) = submission.winner {
        if claimed != outcome.winner {
            return Err(DomainError::invalid_configuration(format!(
                "submitted winner {claimed:?} disagrees with computed {:?}",
                outcome.winner
            )));
        }
    }

    let hole = require_hole(state, "commit_hole")?;
    let final_wager = hole.wager.effective_wager();
    if let Some(claimed) = submission.final_wager {
        if claimed != final_wager {
            return Err(DomainError::invalid_configuration(format!(
                "submitted wager {claimed} disagrees with effective wager {final_wager}"
            )));
        }
    }

    let record = HoleRecord {
        hole_number: hole.hole_number,
        phase: hole.phase,
        rotation_order: hole.rotation_order.clone(),
        captain_index: 0,
        teams: hole.teams.clone(),
        wager: hole.wager.clone(),
        final_wager,
        winner: outcome.winner,
        scores: submission.scores.clone(),
        points_delta: outcome.deltas.clone(),
    };

    for (player, delta) in state.players.iter_mut().zip(outcome.deltas.iter()) {
        player.points += *delta;
    }
    settle_carry(state, record.winner, final_wager);
    let next_rotation = next_order(&record.rotation_order);
    state.hole_history.push(record.clone());

    state.current_hole += 1;
    if state.current_hole > state.config.holes {
        state.status = MatchStatus::Completed;
        state.hole = None;
    } else {
        open_hole(state, next_rotation);
    }
    Ok(record)
}

/// Adopt a one-shot team split from a submission. Only legal while the live
/// formation is still pending; otherwise the actions already taken win.
fn adopt_teams(state: &mut MatchState, spec: &TeamsSpec) -> Result<(), DomainError> {
    let roster = state.roster_ids();
    {
        let hole = require_hole(state, "adopt_teams")?;
        if !hole.teams.is_pending() {
            return Err(DomainError::invalid_configuration(
                "teams were already formed through actions; omit them from the submission",
            ));
        }
        if hole.pending_partner.is_some() {
            return Err(DomainError::invalid_configuration(
                "a partner request is still unanswered",
            ));
        }
    }

    match spec {
        TeamsSpec::Partners { team_one, team_two } => {
            let complement = validate::complement_team(&roster, team_one)?;
            let team_two = match team_two {
                Some(listed) => {
                    let mut sorted = listed.clone();
                    sorted.sort_unstable();
                    let mut expected = complement.clone();
                    expected.sort_unstable();
                    if sorted != expected {
                        return Err(DomainError::invalid_configuration(
                            "team two does not match the roster complement of team one",
                        ));
                    }
                    listed.clone()
                }
                None => complement,
            };
            let hole = require_hole_mut(state, "adopt_teams")?;
            if !team_one.contains(&hole.captain()) {
                return Err(DomainError::invalid_configuration(
                    "team one must include the captain",
                ));
            }
            hole.teams = Teams::Partners {
                team_one: team_one.clone(),
                team_two,
            };
            hole.unassigned_aardvarks.clear();
            validate::ensure_partition(&hole.teams, &roster)
        }
        TeamsSpec::Solo {
            soloist,
            declaration,
        } => formation::declare_solo(
            state,
            *soloist,
            declaration.unwrap_or(SoloStyle::Standard),
        ),
    }
}
