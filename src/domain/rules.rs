//! Match configuration and the hole/phase schedule.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub const MIN_PLAYERS: usize = 4;
pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_HOLES: u8 = 18;
pub const DEFAULT_BASE_WAGER: u32 = 1;
pub const MAX_HANDICAP: f64 = 40.0;
pub const MAX_STROKES: u32 = 30;

/// Legal Joe's Special wager values, in quarters.
pub const JOES_SPECIAL_VALUES: [u32; 3] = [2, 4, 8];

/// Betting phase a hole falls into, derived from hole number and player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Regular,
    /// Base wager doubled for a mid-round window (4-player matches only).
    VinniesVariation,
    /// Late game: the Goat may set the wager directly (Joe's Special) and,
    /// in 5-6 player matches, choose their rotation position.
    Hoepfinger,
    /// Finishing holes pay double, unless Hoepfinger already governs them.
    FinishingDouble,
}

/// Per-match rule configuration.
///
/// Windows are inclusive hole ranges. Defaults follow the player count; all
/// of them can be overridden at match creation for shorter or house-rule
/// matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    /// Base wager unit in quarters.
    pub base_wager: u32,
    /// Total holes in the match.
    pub holes: u8,
    /// Vinnie's Variation window (base wager doubled). 4-player matches only.
    pub vinnie_window: Option<(u8, u8)>,
    /// First Hoepfinger hole, if the phase is played.
    pub hoepfinger_start: Option<u8>,
    /// Window in which the Goat may select a rotation position (5-6 players).
    pub rotation_select_window: Option<(u8, u8)>,
    /// Hole by which every player should have gone solo (4-player matches).
    pub solo_required_through: Option<u8>,
}

impl GameConfig {
    /// Default configuration for a roster size.
    pub fn for_players(player_count: usize) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(DomainError::player_count(format!(
                "Wolf Goat Pig takes {MIN_PLAYERS}-{MAX_PLAYERS} players, got {player_count}"
            )));
        }
        let holes = DEFAULT_HOLES;
        let four_player = player_count == 4;
        Ok(GameConfig {
            player_count,
            base_wager: DEFAULT_BASE_WAGER,
            holes,
            vinnie_window: four_player.then_some((13, 16)),
            hoepfinger_start: Some(if four_player { 17 } else { 16 }),
            rotation_select_window: (!four_player).then_some((holes - 2, holes)),
            solo_required_through: four_player.then_some(16),
        })
    }

    /// Phase for a 1-based hole number. Hoepfinger takes precedence over the
    /// finishing-hole double so the two multipliers never stack.
    pub fn phase_for_hole(&self, hole: u8) -> Phase {
        if let Some(start) = self.hoepfinger_start {
            if hole >= start {
                return Phase::Hoepfinger;
            }
        }
        if let Some((lo, hi)) = self.vinnie_window {
            if (lo..=hi).contains(&hole) {
                return Phase::VinniesVariation;
            }
        }
        if self.is_finishing_hole(hole) {
            return Phase::FinishingDouble;
        }
        Phase::Regular
    }

    /// The last two holes of the match.
    pub fn is_finishing_hole(&self, hole: u8) -> bool {
        hole >= self.holes.saturating_sub(1) && hole <= self.holes
    }

    /// Base wager for a hole before carry-over and in-hole escalation.
    pub fn phase_base_wager(&self, hole: u8) -> u32 {
        match self.phase_for_hole(hole) {
            Phase::VinniesVariation => self.base_wager * 2,
            _ => self.base_wager,
        }
    }

    pub fn in_rotation_select_window(&self, hole: u8) -> bool {
        matches!(self.rotation_select_window, Some((lo, hi)) if (lo..=hi).contains(&hole))
    }

    /// Rotation slots holding Aardvarks: the 5th (and 6th) hitters.
    pub fn aardvark_positions(&self) -> std::ops::Range<usize> {
        4..self.player_count
    }

    pub fn has_aardvarks(&self) -> bool {
        self.player_count > 4
    }
}
