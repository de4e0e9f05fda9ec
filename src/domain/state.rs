//! Match, hole, and wager state containers.
//!
//! `MatchState` is the single unit of mutable state for one match. It is
//! fully serde-serializable so an external store can persist it as one
//! opaque blob between requests.

use serde::{Deserialize, Serialize};

use crate::domain::player::{Player, PlayerId};
use crate::domain::points::Points;
use crate::domain::rules::{GameConfig, Phase};
use crate::errors::domain::DomainError;

/// A competing side within a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    TeamOne,
    TeamTwo,
    Soloist,
    Opponents,
}

impl TeamSide {
    /// The side facing this one.
    pub fn opposing(self) -> TeamSide {
        match self {
            TeamSide::TeamOne => TeamSide::TeamTwo,
            TeamSide::TeamTwo => TeamSide::TeamOne,
            TeamSide::Soloist => TeamSide::Opponents,
            TeamSide::Opponents => TeamSide::Soloist,
        }
    }
}

/// Outcome of a scored hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleWinner {
    Side(TeamSide),
    Push,
}

/// How a solo was declared; the style decides the payout ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoloStyle {
    /// Ordinary solo (declared or forced by declining a partner request).
    Standard,
    /// Captain solo declared before the captain's tee shot; pays 3-for-2.
    Duncan,
    /// Any player, final hole only, against the whole field; pays 3-for-2.
    BigDick,
    /// Aardvark solo declared before the captain's tee shot (5-6 players);
    /// pays 3-for-2, split exactly across all opponents.
    Tunkarri,
}

impl SoloStyle {
    /// 3-for-2 declarations pay 1.5x the stake on a win.
    pub fn pays_three_for_two(self) -> bool {
        !matches!(self, SoloStyle::Standard)
    }
}

/// How the field has split for the hole.
///
/// Invariant once formed: every roster player appears on exactly one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Teams {
    /// No formation yet; the captain is the front of the rotation.
    Pending,
    Partners {
        team_one: Vec<PlayerId>,
        team_two: Vec<PlayerId>,
    },
    Solo {
        soloist: PlayerId,
        opponents: Vec<PlayerId>,
    },
}

impl Teams {
    pub fn is_pending(&self) -> bool {
        matches!(self, Teams::Pending)
    }

    /// Side membership lookup for a formed hole.
    pub fn side_of(&self, player: PlayerId) -> Option<TeamSide> {
        match self {
            Teams::Pending => None,
            Teams::Partners { team_one, team_two } => {
                if team_one.contains(&player) {
                    Some(TeamSide::TeamOne)
                } else if team_two.contains(&player) {
                    Some(TeamSide::TeamTwo)
                } else {
                    None
                }
            }
            Teams::Solo { soloist, opponents } => {
                if *soloist == player {
                    Some(TeamSide::Soloist)
                } else if opponents.contains(&player) {
                    Some(TeamSide::Opponents)
                } else {
                    None
                }
            }
        }
    }

    /// Members of one side, if that side exists in this formation.
    pub fn members_of(&self, side: TeamSide) -> Option<Vec<PlayerId>> {
        match (self, side) {
            (Teams::Partners { team_one, .. }, TeamSide::TeamOne) => Some(team_one.clone()),
            (Teams::Partners { team_two, .. }, TeamSide::TeamTwo) => Some(team_two.clone()),
            (Teams::Solo { soloist, .. }, TeamSide::Soloist) => Some(vec![*soloist]),
            (Teams::Solo { opponents, .. }, TeamSide::Opponents) => Some(opponents.clone()),
            _ => None,
        }
    }
}

/// A double offered by one side to the other, awaiting a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleOffer {
    pub offered_by: PlayerId,
    /// Side that must accept or decline.
    pub target: TeamSide,
}

/// An accepted double, kept for the hole audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleEntry {
    pub offered_by: PlayerId,
    pub accepted_by_team: TeamSide,
    /// Wager multiplier in effect after this double.
    pub multiplier_after: u32,
}

/// An Aardvark's request to join a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AardvarkRequest {
    pub aardvark: PlayerId,
    pub target: TeamSide,
}

/// Per-hole wager ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerState {
    /// Base stake for this hole in quarters, after phase and carry-over.
    pub base_wager: u32,
    pub carry_over_from_previous: bool,
    /// This hole already consumed a carry-over; a push here cannot compound.
    pub carry_blocked: bool,
    /// Goat-set stake that supersedes base/carry/phase math (Hoepfinger).
    pub joes_special: Option<u32>,
    /// Accepted doubles, in order.
    pub doubles: Vec<DoubleEntry>,
    pub pending_double: Option<DoubleOffer>,
    pub float_invoked_by: Option<PlayerId>,
    /// The captain is the Goat, so the wager auto-doubles...
    pub option_active: bool,
    /// ...unless the captain proactively turned it off.
    pub option_declined: bool,
    /// A declined partner request or a standard solo doubled the stake.
    pub solo_doubled: bool,
    /// Duncan / Big Dick / Tunkarri, at most one per hole.
    pub declaration: Option<SoloStyle>,
    /// Aardvark rejections: 0 none, 1 toss (2x pot), 2 ping-pong (4x pot).
    pub tosses: u8,
}

impl WagerState {
    pub fn opening(base_wager: u32, carry_over: bool, carry_blocked: bool) -> Self {
        WagerState {
            base_wager,
            carry_over_from_previous: carry_over,
            carry_blocked,
            joes_special: None,
            doubles: Vec::new(),
            pending_double: None,
            float_invoked_by: None,
            option_active: false,
            option_declined: false,
            solo_doubled: false,
            declaration: None,
            tosses: 0,
        }
    }

    /// Combined multiplier from doubles, float, the Option, and solo stakes.
    pub fn multiplier(&self) -> u32 {
        let mut m = 1u32 << self.doubles.len().min(16);
        if self.float_invoked_by.is_some() {
            m *= 2;
        }
        if self.option_active && !self.option_declined {
            m *= 2;
        }
        if self.solo_doubled {
            m *= 2;
        }
        m
    }

    /// Stake each losing player owes, in quarters, before toss multipliers.
    pub fn effective_wager(&self) -> u32 {
        self.joes_special.unwrap_or(self.base_wager) * self.multiplier()
    }

    /// Pot multiplier from Aardvark tosses: 1x, 2x, or 4x.
    pub fn toss_multiplier(&self) -> u32 {
        1u32 << self.tosses.min(2)
    }
}

/// In-progress state for the hole currently being played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleState {
    pub hole_number: u8,
    pub phase: Phase,
    /// Hitting order; the captain is always `rotation_order[0]`.
    pub rotation_order: Vec<PlayerId>,
    pub teams: Teams,
    /// Partner asked by the captain, awaiting accept/decline.
    pub pending_partner: Option<PlayerId>,
    /// Aardvarks who have not yet joined a side (5-6 player matches).
    pub unassigned_aardvarks: Vec<PlayerId>,
    pub pending_aardvark: Option<AardvarkRequest>,
    /// The Goat already exercised rotation selection for this hole.
    pub rotation_selected: bool,
    /// Externally reported: the captain's tee shot has been struck.
    pub captain_has_hit: bool,
    /// Externally reported: the tee shots ahead of the partnership decision
    /// point are complete (the partnership deadline).
    pub tee_shots_complete: bool,
    pub wager: WagerState,
}

impl HoleState {
    pub fn captain(&self) -> PlayerId {
        self.rotation_order[0]
    }
}

/// Immutable record of a committed hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub hole_number: u8,
    pub phase: Phase,
    pub rotation_order: Vec<PlayerId>,
    /// Index of the captain within `rotation_order` (normally 0).
    pub captain_index: u8,
    pub teams: Teams,
    pub wager: WagerState,
    /// Stake per losing player in quarters after all in-hole escalation.
    pub final_wager: u32,
    pub winner: HoleWinner,
    /// Raw strokes, indexed by `PlayerId`.
    pub scores: Vec<u32>,
    /// Exact per-player point change, indexed by `PlayerId`; sums to zero.
    pub points_delta: Vec<Points>,
}

impl HoleRecord {
    /// Accepted doubles for audit.
    pub fn doubles(&self) -> &[DoubleEntry] {
        &self.wager.doubles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Completed,
}

/// Entire match container, sufficient for every engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub status: MatchStatus,
    /// 1-based hole currently in progress (or just past the end when done).
    pub current_hole: u8,
    /// Live state of the current hole; `None` once the match is complete.
    pub hole: Option<HoleState>,
    /// Stake carried into the next hole by an unresolved push, in quarters.
    pub carried_stake: Option<u32>,
    /// The carried stake was doubled by the immediately preceding push (as
    /// opposed to riding unchanged past a blocked push).
    pub carry_fresh: bool,
    /// The most recent push already consumed a carry; re-arms on a decisive
    /// hole.
    pub carry_blocked: bool,
    pub hole_history: Vec<HoleRecord>,
}

impl MatchState {
    pub fn player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.players
            .get(id as usize)
            .ok_or_else(|| DomainError::invalid_configuration(format!("unknown player id {id}")))
    }

    pub fn roster_ids(&self) -> Vec<PlayerId> {
        (0..self.players.len() as u8).collect()
    }

    /// Running totals indexed by `PlayerId`.
    pub fn standings(&self) -> Vec<Points> {
        self.players.iter().map(|p| p.points).collect()
    }

    pub fn record_for(&self, hole_number: u8) -> Option<&HoleRecord> {
        self.hole_history
            .iter()
            .find(|r| r.hole_number == hole_number)
    }
}

pub fn require_hole<'a>(
    state: &'a MatchState,
    ctx: &'static str,
) -> Result<&'a HoleState, DomainError> {
    state
        .hole
        .as_ref()
        .ok_or_else(|| DomainError::sequence(format!("no hole in progress ({ctx})")))
}

pub fn require_hole_mut<'a>(
    state: &'a mut MatchState,
    ctx: &'static str,
) -> Result<&'a mut HoleState, DomainError> {
    state
        .hole
        .as_mut()
        .ok_or_else(|| DomainError::sequence(format!("no hole in progress ({ctx})")))
}

pub fn require_in_progress(state: &MatchState, ctx: &'static str) -> Result<(), DomainError> {
    if state.status != MatchStatus::InProgress {
        return Err(DomainError::sequence(format!(
            "match is already complete ({ctx})"
        )));
    }
    Ok(())
}
