//! Player ledger: identity, handicap, running totals, per-match usage flags.

use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::rules::MAX_HANDICAP;
use crate::errors::domain::DomainError;

/// Roster index, stable for the whole match.
pub type PlayerId = u8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub handicap: f64,
    /// Running point total in quarters.
    pub points: Points,
    /// The once-per-match float has been spent.
    pub float_used: bool,
    /// Times this player has gone solo (any declaration style).
    pub solo_count: u8,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, handicap: f64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_configuration(format!(
                "player {id} has an empty name"
            )));
        }
        if !(0.0..=MAX_HANDICAP).contains(&handicap) || !handicap.is_finite() {
            return Err(DomainError::invalid_configuration(format!(
                "handicap {handicap} for {name} out of range 0..={MAX_HANDICAP}"
            )));
        }
        Ok(Player {
            id,
            name,
            handicap,
            points: Points::ZERO,
            float_used: false,
            solo_count: 0,
        })
    }
}

/// Players tied for the strictly lowest running total ("the Goat").
///
/// Everyone qualifies on a fresh match; ties always qualify every tied
/// player.
pub fn goat_ids(players: &[Player]) -> Vec<PlayerId> {
    let Some(min) = players.iter().map(|p| p.points).min() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| p.points == min)
        .map(|p| p.id)
        .collect()
}
