//! Per-hole team formation: partners, solo declarations, and Aardvark joins.

use crate::domain::player::PlayerId;
use crate::domain::state::{
    require_hole_mut, require_in_progress, AardvarkRequest, MatchState, SoloStyle, TeamSide, Teams,
};
use crate::domain::validate;
use crate::errors::domain::DomainError;

/// Record that the captain's tee shot has been struck.
pub fn mark_captain_hit(state: &mut MatchState) -> Result<(), DomainError> {
    require_in_progress(state, "mark_captain_hit")?;
    let hole = require_hole_mut(state, "mark_captain_hit")?;
    hole.captain_has_hit = true;
    Ok(())
}

/// Record that the tee shots ahead of the partnership decision point are
/// complete; this closes the partnership window.
pub fn mark_tee_shots_complete(state: &mut MatchState) -> Result<(), DomainError> {
    require_in_progress(state, "mark_tee_shots_complete")?;
    let hole = require_hole_mut(state, "mark_tee_shots_complete")?;
    hole.captain_has_hit = true;
    hole.tee_shots_complete = true;
    Ok(())
}

/// Captain asks a partner; the hole stays pending until they respond.
pub fn request_partner(
    state: &mut MatchState,
    captain: PlayerId,
    partner: PlayerId,
) -> Result<(), DomainError> {
    require_in_progress(state, "request_partner")?;
    validate::ensure_known_player(&state.config, captain)?;
    validate::ensure_known_player(&state.config, partner)?;
    let hole = require_hole_mut(state, "request_partner")?;
    validate::ensure_pending(hole, "a partner request")?;
    validate::ensure_captain(hole, captain, "requesting a partner")?;
    validate::ensure_before_partner_deadline(hole)?;
    if captain == partner {
        return Err(DomainError::invalid_configuration(
            "the captain cannot partner themselves",
        ));
    }
    if hole.pending_partner.is_some() {
        return Err(DomainError::phase(
            "a partner request is already awaiting a response",
        ));
    }
    hole.pending_partner = Some(partner);
    Ok(())
}

/// Accept the pending partner request: captain + partner vs the field.
pub fn accept_partner(state: &mut MatchState, partner: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "accept_partner")?;
    let roster = state.roster_ids();
    let hole = require_hole_mut(state, "accept_partner")?;
    validate::ensure_pending(hole, "accepting a partnership")?;
    let Some(asked) = hole.pending_partner else {
        return Err(DomainError::phase("no partner request is pending"));
    };
    if asked != partner {
        return Err(DomainError::actor(format!(
            "player {partner} was not the requested partner (player {asked} was)"
        )));
    }

    let captain = hole.captain();
    let team_one = vec![captain, partner];
    // An Aardvark picked as partner is no longer floating.
    hole.unassigned_aardvarks.retain(|&p| p != partner);
    let floating = hole.unassigned_aardvarks.clone();
    let team_two: Vec<PlayerId> = validate::complement_team(&roster, &team_one)?
        .into_iter()
        .filter(|p| !floating.contains(p))
        .collect();
    if team_two.is_empty() {
        return Err(DomainError::invalid_configuration(
            "no opponents remain after the partnership",
        ));
    }
    hole.teams = Teams::Partners { team_one, team_two };
    hole.pending_partner = None;
    Ok(())
}

/// Decline the pending partner request: the captain goes solo against the
/// field and the wager doubles.
pub fn decline_partner(state: &mut MatchState, partner: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "decline_partner")?;
    let roster = state.roster_ids();
    let hole = require_hole_mut(state, "decline_partner")?;
    validate::ensure_pending(hole, "declining a partnership")?;
    let Some(asked) = hole.pending_partner else {
        return Err(DomainError::phase("no partner request is pending"));
    };
    if asked != partner {
        return Err(DomainError::actor(format!(
            "player {partner} was not the requested partner (player {asked} was)"
        )));
    }

    let captain = hole.captain();
    let opponents = validate::complement_team(&roster, &[captain])?;
    hole.teams = Teams::Solo {
        soloist: captain,
        opponents,
    };
    hole.pending_partner = None;
    hole.unassigned_aardvarks.clear();
    hole.wager.solo_doubled = true;
    state.players[captain as usize].solo_count += 1;
    Ok(())
}

/// Voluntary solo declaration in one of its four styles.
pub fn declare_solo(
    state: &mut MatchState,
    player: PlayerId,
    style: SoloStyle,
) -> Result<(), DomainError> {
    require_in_progress(state, "declare_solo")?;
    validate::ensure_known_player(&state.config, player)?;
    let roster = state.roster_ids();
    let config = state.config.clone();
    let final_hole = config.holes;
    let hole = require_hole_mut(state, "declare_solo")?;
    validate::ensure_pending(hole, "a solo declaration")?;
    if hole.pending_partner.is_some() {
        return Err(DomainError::phase(
            "a partner request is awaiting a response; it must be resolved first",
        ));
    }
    if hole.wager.declaration.is_some() {
        return Err(DomainError::duplicate_usage(
            "a solo declaration is already active on this hole",
        ));
    }

    match style {
        SoloStyle::Standard => {
            validate::ensure_captain(hole, player, "going solo")?;
        }
        SoloStyle::Duncan => {
            validate::ensure_captain(hole, player, "the Duncan")?;
            validate::ensure_before_captain_shot(hole, "the Duncan")?;
        }
        SoloStyle::BigDick => {
            if hole.hole_number != final_hole {
                return Err(DomainError::phase(format!(
                    "the Big Dick is only available on hole {final_hole}"
                )));
            }
        }
        SoloStyle::Tunkarri => {
            validate::ensure_aardvark(&config, hole, player, "the Tunkarri")?;
            validate::ensure_before_captain_shot(hole, "the Tunkarri")?;
        }
    }

    let opponents = validate::complement_team(&roster, &[player])?;
    hole.teams = Teams::Solo {
        soloist: player,
        opponents,
    };
    hole.unassigned_aardvarks.clear();
    match style {
        SoloStyle::Standard => hole.wager.solo_doubled = true,
        _ => hole.wager.declaration = Some(style),
    }
    state.players[player as usize].solo_count += 1;
    Ok(())
}

/// An Aardvark asks to join one of the formed partner sides.
pub fn aardvark_request_team(
    state: &mut MatchState,
    aardvark: PlayerId,
    target: TeamSide,
) -> Result<(), DomainError> {
    require_in_progress(state, "aardvark_request_team")?;
    let config = state.config.clone();
    let hole = require_hole_mut(state, "aardvark_request_team")?;
    validate::ensure_aardvark(&config, hole, aardvark, "requesting a team")?;
    if !hole.unassigned_aardvarks.contains(&aardvark) {
        return Err(DomainError::duplicate_usage(format!(
            "Aardvark {aardvark} has already joined a side on this hole"
        )));
    }
    if !matches!(hole.teams, Teams::Partners { .. }) {
        return Err(DomainError::phase(
            "Aardvark requests need two formed partner sides",
        ));
    }
    if !matches!(target, TeamSide::TeamOne | TeamSide::TeamTwo) {
        return Err(DomainError::invalid_configuration(
            "an Aardvark can only request one of the partner sides",
        ));
    }
    if !hole.tee_shots_complete {
        return Err(DomainError::phase(
            "the Aardvark may only ask after both leading teams have hit",
        ));
    }
    if hole.pending_aardvark.is_some() {
        return Err(DomainError::phase(
            "an Aardvark request is already awaiting a response",
        ));
    }
    hole.pending_aardvark = Some(AardvarkRequest { aardvark, target });
    Ok(())
}

/// Outcome of responding to an Aardvark request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AardvarkOutcome {
    /// The Aardvark joined this side.
    Joined(TeamSide),
    /// Tossed; the request now sits with the other side at doubled stakes.
    Tossed { now_asking: TeamSide },
}

/// Accept the pending Aardvark, or toss them to the other side.
///
/// A toss doubles the pot for the hole. A counter-toss by the other side
/// (ping-pong) stacks to 4x and forces the Aardvark back onto the side they
/// asked first; further tosses are illegal.
pub fn respond_to_aardvark(
    state: &mut MatchState,
    accept: bool,
) -> Result<AardvarkOutcome, DomainError> {
    require_in_progress(state, "respond_to_aardvark")?;
    let hole = require_hole_mut(state, "respond_to_aardvark")?;
    let Some(request) = hole.pending_aardvark else {
        return Err(DomainError::phase(
            "no Aardvark request is pending (a ping-pong needs a prior toss)",
        ));
    };

    if accept {
        join_side(hole, request.aardvark, request.target)?;
        hole.pending_aardvark = None;
        return Ok(AardvarkOutcome::Joined(request.target));
    }

    match hole.wager.tosses {
        0 => {
            hole.wager.tosses = 1;
            let other = request.target.opposing();
            hole.pending_aardvark = Some(AardvarkRequest {
                aardvark: request.aardvark,
                target: other,
            });
            Ok(AardvarkOutcome::Tossed { now_asking: other })
        }
        1 => {
            // Ping-pong: back to the originally requested side at 4x.
            hole.wager.tosses = 2;
            let landing = request.target.opposing();
            join_side(hole, request.aardvark, landing)?;
            hole.pending_aardvark = None;
            Ok(AardvarkOutcome::Joined(landing))
        }
        _ => Err(DomainError::phase(
            "the Aardvark has already been ping-ponged; no further tosses",
        )),
    }
}

fn join_side(
    hole: &mut crate::domain::state::HoleState,
    aardvark: PlayerId,
    side: TeamSide,
) -> Result<(), DomainError> {
    let Teams::Partners { team_one, team_two } = &mut hole.teams else {
        return Err(DomainError::phase(
            "Aardvark placement needs two formed partner sides",
        ));
    };
    match side {
        TeamSide::TeamOne => team_one.push(aardvark),
        TeamSide::TeamTwo => team_two.push(aardvark),
        _ => {
            return Err(DomainError::invalid_configuration(
                "an Aardvark can only land on one of the partner sides",
            ))
        }
    }
    hole.unassigned_aardvarks.retain(|&p| p != aardvark);
    Ok(())
}

/// Formation must be complete before the hole can be scored: a formed split
/// and no floating Aardvarks or unanswered requests.
pub fn ensure_formation_final(state: &MatchState) -> Result<(), DomainError> {
    let hole = crate::domain::state::require_hole(state, "ensure_formation_final")?;
    if hole.teams.is_pending() {
        return Err(DomainError::invalid_configuration(
            "teams were never formed on this hole",
        ));
    }
    if hole.pending_partner.is_some() {
        return Err(DomainError::invalid_configuration(
            "a partner request is still unanswered",
        ));
    }
    if hole.pending_aardvark.is_some() {
        return Err(DomainError::invalid_configuration(
            "an Aardvark request is still unanswered",
        ));
    }
    if !hole.unassigned_aardvarks.is_empty() {
        return Err(DomainError::invalid_configuration(format!(
            "Aardvark(s) {:?} never joined a side",
            hole.unassigned_aardvarks
        )));
    }
    validate::ensure_partition(&hole.teams, &state.roster_ids())
}
