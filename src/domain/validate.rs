//! Central precondition checks for every mutating operation.
//!
//! Each helper rejects with a named [`ViolationKind`] rather than silently
//! coercing input; callers never guess intent on invalid input.

use std::collections::BTreeSet;

use crate::domain::player::{goat_ids, Player, PlayerId};
use crate::domain::rules::{GameConfig, JOES_SPECIAL_VALUES, MAX_STROKES};
use crate::domain::state::{HoleState, Teams};
use crate::errors::domain::DomainError;

pub fn ensure_known_player(config: &GameConfig, player: PlayerId) -> Result<(), DomainError> {
    if (player as usize) < config.player_count {
        Ok(())
    } else {
        Err(DomainError::invalid_configuration(format!(
            "player id {player} outside roster of {}",
            config.player_count
        )))
    }
}

pub fn ensure_captain(hole: &HoleState, actor: PlayerId, action: &str) -> Result<(), DomainError> {
    if hole.captain() == actor {
        Ok(())
    } else {
        Err(DomainError::actor(format!(
            "{action} is a captain privilege; player {actor} is not captain of hole {}",
            hole.hole_number
        )))
    }
}

pub fn ensure_pending(hole: &HoleState, action: &str) -> Result<(), DomainError> {
    if hole.teams.is_pending() {
        Ok(())
    } else {
        Err(DomainError::phase(format!(
            "{action} requires an unformed hole; teams are already set on hole {}",
            hole.hole_number
        )))
    }
}

pub fn ensure_before_partner_deadline(hole: &HoleState) -> Result<(), DomainError> {
    if hole.tee_shots_complete {
        Err(DomainError::phase(format!(
            "the partnership deadline has passed on hole {}",
            hole.hole_number
        )))
    } else {
        Ok(())
    }
}

pub fn ensure_before_captain_shot(hole: &HoleState, action: &str) -> Result<(), DomainError> {
    if hole.captain_has_hit {
        Err(DomainError::phase(format!(
            "{action} must be declared before the captain's tee shot"
        )))
    } else {
        Ok(())
    }
}

pub fn ensure_aardvark_match(config: &GameConfig, action: &str) -> Result<(), DomainError> {
    if config.has_aardvarks() {
        Ok(())
    } else {
        Err(DomainError::player_count(format!(
            "{action} requires a 5-6 player match, this match has {}",
            config.player_count
        )))
    }
}

/// The actor must occupy an Aardvark rotation slot on this hole.
pub fn ensure_aardvark(
    config: &GameConfig,
    hole: &HoleState,
    actor: PlayerId,
    action: &str,
) -> Result<(), DomainError> {
    ensure_aardvark_match(config, action)?;
    let is_aardvark = config
        .aardvark_positions()
        .any(|pos| hole.rotation_order.get(pos) == Some(&actor));
    if is_aardvark {
        Ok(())
    } else {
        Err(DomainError::actor(format!(
            "{action} is reserved for the Aardvark; player {actor} hits in the leading group"
        )))
    }
}

pub fn ensure_goat(players: &[Player], actor: PlayerId, action: &str) -> Result<(), DomainError> {
    if goat_ids(players).contains(&actor) {
        Ok(())
    } else {
        Err(DomainError::actor(format!(
            "{action} is reserved for the Goat; player {actor} is not lowest in the standings"
        )))
    }
}

pub fn ensure_joes_special_value(value: u32) -> Result<(), DomainError> {
    if JOES_SPECIAL_VALUES.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::invalid_configuration(format!(
            "Joe's Special must be one of {JOES_SPECIAL_VALUES:?} quarters, got {value}"
        )))
    }
}

/// Every roster player on exactly one side, and no strangers.
pub fn ensure_partition(teams: &Teams, roster: &[PlayerId]) -> Result<(), DomainError> {
    let members: Vec<PlayerId> = match teams {
        Teams::Pending => {
            return Err(DomainError::invalid_configuration(
                "teams must be formed before the hole can be scored",
            ))
        }
        Teams::Partners { team_one, team_two } => {
            if team_one.is_empty() || team_two.is_empty() {
                return Err(DomainError::invalid_configuration(
                    "both partner sides need at least one member",
                ));
            }
            team_one.iter().chain(team_two.iter()).copied().collect()
        }
        Teams::Solo { soloist, opponents } => {
            if opponents.is_empty() {
                return Err(DomainError::invalid_configuration(
                    "a solo needs at least one opponent",
                ));
            }
            std::iter::once(*soloist).chain(opponents.iter().copied()).collect()
        }
    };

    let unique: BTreeSet<PlayerId> = members.iter().copied().collect();
    if unique.len() != members.len() {
        return Err(DomainError::invalid_configuration(
            "a player appears on more than one side",
        ));
    }
    let expected: BTreeSet<PlayerId> = roster.iter().copied().collect();
    if unique != expected {
        return Err(DomainError::invalid_configuration(format!(
            "team split does not cover the roster exactly: got {unique:?}, expected {expected:?}"
        )));
    }
    Ok(())
}

/// Explicit, validated complement computation ("all players minus team one").
///
/// Rejects overlapping or out-of-roster members instead of silently guessing
/// a second team from malformed input.
pub fn complement_team(
    roster: &[PlayerId],
    team_one: &[PlayerId],
) -> Result<Vec<PlayerId>, DomainError> {
    let unique: BTreeSet<PlayerId> = team_one.iter().copied().collect();
    if unique.len() != team_one.len() {
        return Err(DomainError::invalid_configuration(
            "team one lists a player twice",
        ));
    }
    for member in &unique {
        if !roster.contains(member) {
            return Err(DomainError::invalid_configuration(format!(
                "team one member {member} is not in the roster"
            )));
        }
    }
    let team_two: Vec<PlayerId> = roster
        .iter()
        .copied()
        .filter(|p| !unique.contains(p))
        .collect();
    if team_two.is_empty() {
        return Err(DomainError::invalid_configuration(
            "team one covers the whole roster; nobody is left to oppose it",
        ));
    }
    Ok(team_two)
}

/// Raw scores must cover the roster exactly with plausible stroke counts.
pub fn ensure_scores(scores: &[u32], roster: &[PlayerId]) -> Result<(), DomainError> {
    if scores.len() != roster.len() {
        return Err(DomainError::invalid_configuration(format!(
            "expected {} scores, got {}",
            roster.len(),
            scores.len()
        )));
    }
    for (player, &strokes) in roster.iter().zip(scores.iter()) {
        if strokes == 0 || strokes > MAX_STROKES {
            return Err(DomainError::invalid_configuration(format!(
                "strokes {strokes} for player {player} outside 1..={MAX_STROKES}"
            )));
        }
    }
    Ok(())
}
