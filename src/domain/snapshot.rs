//! Public snapshot API for observing a match without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::player::{goat_ids, PlayerId};
use crate::domain::points::Points;
use crate::domain::rules::Phase;
use crate::domain::state::{AardvarkRequest, MatchState, MatchStatus, SoloStyle, Teams};
use crate::domain::wager::{wager_preview, WagerPreview};

/// Match-level header present in every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHeader {
    pub status: MatchStatus,
    pub current_hole: u8,
    pub holes: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub rotation_order: Vec<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain: Option<PlayerId>,
}

/// One row of the running standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player: PlayerId,
    pub name: String,
    pub points: Points,
    pub float_used: bool,
    pub solo_count: u8,
}

/// Adjacently tagged union of formation-specific snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formation", content = "data")]
pub enum FormationSnapshot {
    Pending {
        captain: PlayerId,
        requested_partner: Option<PlayerId>,
    },
    Partners {
        team_one: Vec<PlayerId>,
        team_two: Vec<PlayerId>,
        unassigned_aardvarks: Vec<PlayerId>,
        pending_aardvark: Option<AardvarkRequest>,
    },
    Solo {
        soloist: PlayerId,
        opponents: Vec<PlayerId>,
        declaration: Option<SoloStyle>,
    },
    MatchComplete,
}

/// Top-level snapshot combining header, standings, and the live hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub header: MatchHeader,
    pub standings: Vec<StandingEntry>,
    /// Player(s) currently lowest in the standings.
    pub goats: Vec<PlayerId>,
    pub formation: FormationSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wager: Option<WagerPreview>,
    pub holes_recorded: usize,
}

/// Produce a snapshot of the current match state. Never fails; a completed
/// match simply has no live hole to describe.
pub fn snapshot(state: &MatchState) -> MatchSnapshot {
    let hole = state.hole.as_ref();
    let header = MatchHeader {
        status: state.status,
        current_hole: state.current_hole,
        holes: state.config.holes,
        phase: hole.map(|h| h.phase),
        rotation_order: hole
            .map(|h| h.rotation_order.clone())
            .unwrap_or_else(|| {
                state
                    .hole_history
                    .last()
                    .map(|r| r.rotation_order.clone())
                    .unwrap_or_default()
            }),
        captain: hole.map(|h| h.captain()),
    };

    let standings = state
        .players
        .iter()
        .map(|p| StandingEntry {
            player: p.id,
            name: p.name.clone(),
            points: p.points,
            float_used: p.float_used,
            solo_count: p.solo_count,
        })
        .collect();

    let formation = match hole {
        None => FormationSnapshot::MatchComplete,
        Some(h) => match &h.teams {
            Teams::Pending => FormationSnapshot::Pending {
                captain: h.captain(),
                requested_partner: h.pending_partner,
            },
            Teams::Partners { team_one, team_two } => FormationSnapshot::Partners {
                team_one: team_one.clone(),
                team_two: team_two.clone(),
                unassigned_aardvarks: h.unassigned_aardvarks.clone(),
                pending_aardvark: h.pending_aardvark,
            },
            Teams::Solo { soloist, opponents } => FormationSnapshot::Solo {
                soloist: *soloist,
                opponents: opponents.clone(),
                declaration: h.wager.declaration,
            },
        },
    };

    MatchSnapshot {
        header,
        standings,
        goats: goat_ids(&state.players),
        formation,
        wager: wager_preview(state).ok(),
        holes_recorded: state.hole_history.len(),
    }
}
