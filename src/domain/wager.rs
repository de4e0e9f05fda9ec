//! Wager ledger: doubles, the float, the Option, Joe's Special, carry-over.

use serde::{Deserialize, Serialize};

use crate::domain::player::{goat_ids, PlayerId};
use crate::domain::rules::Phase;
use crate::domain::state::{
    require_hole, require_hole_mut, require_in_progress, DoubleEntry, DoubleOffer, HoleWinner,
    MatchState, WagerState,
};
use crate::domain::validate;
use crate::errors::domain::DomainError;

/// Opening wager facts for a hole: stake, and how carry-over shaped it.
pub fn opening_wager(state: &MatchState, hole_number: u8) -> WagerState {
    let phase_base = state.config.phase_base_wager(hole_number);
    match state.carried_stake {
        Some(stake) => WagerState::opening(stake, state.carry_fresh, state.carry_blocked),
        None => WagerState::opening(phase_base, false, false),
    }
}

/// Re-derive whether the Option arms: the captain is the current Goat.
///
/// The Option never applies on hole 1 (no standings exist yet to be lowest
/// in). Rotation selection can change the captain, so this is recomputed
/// whenever the front of the order moves.
pub fn refresh_option(state: &mut MatchState) {
    let armed = !state.hole_history.is_empty()
        && state
            .hole
            .as_ref()
            .map(|h| goat_ids(&state.players).contains(&h.captain()))
            .unwrap_or(false);
    if let Some(hole) = state.hole.as_mut() {
        hole.wager.option_active = armed;
    }
}

/// Offer to double the current wager; the opposing side must respond.
pub fn offer_double(state: &mut MatchState, player: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "offer_double")?;
    validate::ensure_known_player(&state.config, player)?;
    let hole = require_hole_mut(state, "offer_double")?;
    let Some(side) = hole.teams.side_of(player) else {
        return Err(DomainError::phase(
            "doubles can only be offered once teams are formed",
        ));
    };
    if hole.wager.pending_double.is_some() {
        return Err(DomainError::phase(
            "a double is already awaiting a response",
        ));
    }
    hole.wager.pending_double = Some(DoubleOffer {
        offered_by: player,
        target: side.opposing(),
    });
    Ok(())
}

/// Accept the pending double: the wager multiplies by two, logged for audit.
pub fn accept_double(state: &mut MatchState, responder: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "accept_double")?;
    let hole = require_hole_mut(state, "accept_double")?;
    let Some(offer) = hole.wager.pending_double else {
        return Err(DomainError::phase("no double is awaiting a response"));
    };
    if hole.teams.side_of(responder) != Some(offer.target) {
        return Err(DomainError::actor(format!(
            "player {responder} is not on the side facing the double"
        )));
    }
    hole.wager.pending_double = None;
    let multiplier_after = hole.wager.multiplier() * 2;
    hole.wager.doubles.push(DoubleEntry {
        offered_by: offer.offered_by,
        accepted_by_team: offer.target,
        multiplier_after,
    });
    Ok(())
}

/// Decline the pending double: no change to the wager.
pub fn decline_double(state: &mut MatchState, responder: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "decline_double")?;
    let hole = require_hole_mut(state, "decline_double")?;
    let Some(offer) = hole.wager.pending_double else {
        return Err(DomainError::phase("no double is awaiting a response"));
    };
    if hole.teams.side_of(responder) != Some(offer.target) {
        return Err(DomainError::actor(format!(
            "player {responder} is not on the side facing the double"
        )));
    }
    hole.wager.pending_double = None;
    Ok(())
}

/// Captain's once-per-match float: double the wager pre-emptively.
pub fn invoke_float(state: &mut MatchState, captain: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "invoke_float")?;
    validate::ensure_known_player(&state.config, captain)?;
    if state.players[captain as usize].float_used {
        return Err(DomainError::duplicate_usage(format!(
            "player {captain} has already used their float this match"
        )));
    }
    let hole = require_hole_mut(state, "invoke_float")?;
    validate::ensure_captain(hole, captain, "the float")?;
    if hole.wager.float_invoked_by.is_some() {
        return Err(DomainError::duplicate_usage(
            "a float is already in effect on this hole",
        ));
    }
    hole.wager.float_invoked_by = Some(captain);
    state.players[captain as usize].float_used = true;
    Ok(())
}

/// Captain opts out of the Option's automatic double.
pub fn decline_option(state: &mut MatchState, captain: PlayerId) -> Result<(), DomainError> {
    require_in_progress(state, "decline_option")?;
    let hole = require_hole_mut(state, "decline_option")?;
    validate::ensure_captain(hole, captain, "declining the Option")?;
    if !hole.wager.option_active {
        return Err(DomainError::phase(
            "the Option is not in effect on this hole",
        ));
    }
    hole.wager.option_declined = true;
    Ok(())
}

/// The Goat sets the hole's stake directly during Hoepfinger.
pub fn set_joes_special(
    state: &mut MatchState,
    goat: PlayerId,
    value: u32,
) -> Result<(), DomainError> {
    require_in_progress(state, "set_joes_special")?;
    validate::ensure_known_player(&state.config, goat)?;
    validate::ensure_goat(&state.players, goat, "Joe's Special")?;
    validate::ensure_joes_special_value(value)?;
    let hole = require_hole_mut(state, "set_joes_special")?;
    if hole.phase != Phase::Hoepfinger {
        return Err(DomainError::phase(format!(
            "Joe's Special is a Hoepfinger rule; hole {} is not in that phase",
            hole.hole_number
        )));
    }
    if hole.wager.joes_special.is_some() {
        return Err(DomainError::duplicate_usage(
            "Joe's Special has already been set on this hole",
        ));
    }
    hole.wager.joes_special = Some(value);
    Ok(())
}

/// Cross-hole carry bookkeeping, applied after a hole is committed.
pub fn settle_carry(state: &mut MatchState, winner: HoleWinner, final_wager: u32) {
    match winner {
        HoleWinner::Push => {
            if state.carry_blocked {
                // A second consecutive push rides at the same stake.
                state.carried_stake = Some(final_wager);
                state.carry_fresh = false;
            } else {
                state.carried_stake = Some(final_wager * 2);
                state.carry_fresh = true;
                state.carry_blocked = true;
            }
        }
        HoleWinner::Side(_) => {
            state.carried_stake = None;
            state.carry_fresh = false;
            state.carry_blocked = false;
        }
    }
}

/// Non-mutating wager preview for the hole currently in progress, with the
/// carry-over and phase reasoning a client needs before committing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerPreview {
    pub hole_number: u8,
    pub phase: Phase,
    /// Opening stake for the hole, in quarters.
    pub base_wager: u32,
    /// Stake per losing player right now, after in-hole escalation.
    pub amount: u32,
    pub carry_over: bool,
    pub carry_blocked_reason: Option<String>,
    pub phase_note: Option<String>,
}

pub fn wager_preview(state: &MatchState) -> Result<WagerPreview, DomainError> {
    let hole = require_hole(state, "wager_preview")?;
    let wager = &hole.wager;
    let carry_blocked_reason = (wager.carry_blocked && !wager.carry_over_from_previous)
        .then(|| {
            "carry-over blocked: the previous hole was itself carried; \
             a decisive hole must intervene"
                .to_string()
        });
    let phase_note = match hole.phase {
        Phase::VinniesVariation => Some("Vinnie's Variation: base wager doubled".to_string()),
        Phase::Hoepfinger => match wager.joes_special {
            Some(v) => Some(format!("Joe's Special in effect: stake set to {v} quarters")),
            None => Some("Hoepfinger: the Goat may set the stake to 2, 4, or 8".to_string()),
        },
        Phase::FinishingDouble => Some("finishing hole: points pay double".to_string()),
        Phase::Regular => None,
    };
    Ok(WagerPreview {
        hole_number: hole.hole_number,
        phase: hole.phase,
        base_wager: wager.joes_special.unwrap_or(wager.base_wager),
        amount: wager.effective_wager(),
        carry_over: wager.carry_over_from_previous,
        carry_blocked_reason,
        phase_note,
    })
}

/// Players who never went solo by the configured deadline hole (4-player
/// matches). Detectable, deliberately not blocking.
pub fn players_missing_solo(state: &MatchState) -> Vec<PlayerId> {
    match state.config.solo_required_through {
        Some(_) => state
            .players
            .iter()
            .filter(|p| p.solo_count == 0)
            .map(|p| p.id)
            .collect(),
        None => Vec::new(),
    }
}
