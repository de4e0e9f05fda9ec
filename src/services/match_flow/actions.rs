//! Typed in-hole actions and their dispatch.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::MatchFlowService;
use crate::domain::player::PlayerId;
use crate::domain::rotation::select_rotation;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::{SoloStyle, TeamSide};
use crate::domain::{teams, wager};
use crate::error::EngineError;

/// Every in-hole action a client can take between hole open and commit.
///
/// One union keeps the wire surface to a single endpoint; each variant maps
/// onto exactly one domain operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MatchAction {
    MarkCaptainHit,
    MarkTeeShotsComplete,
    RequestPartner { captain: PlayerId, partner: PlayerId },
    AcceptPartner { partner: PlayerId },
    DeclinePartner { partner: PlayerId },
    DeclareSolo { player: PlayerId, style: SoloStyle },
    AardvarkRequest { aardvark: PlayerId, target: TeamSide },
    AardvarkResponse { accept: bool },
    OfferDouble { player: PlayerId },
    AcceptDouble { player: PlayerId },
    DeclineDouble { player: PlayerId },
    InvokeFloat { captain: PlayerId },
    DeclineOption { captain: PlayerId },
    SetJoesSpecial { goat: PlayerId, value: u32 },
    SelectRotation {
        hole_number: u8,
        goat: PlayerId,
        position: usize,
    },
}

impl MatchFlowService {
    /// Apply one action to a match and return the updated snapshot.
    pub fn apply(
        &self,
        match_id: Uuid,
        action: MatchAction,
    ) -> Result<MatchSnapshot, EngineError> {
        let handle = self.repository().get(match_id)?;
        let mut state = handle.lock();
        debug!(match_id = %match_id, ?action, "applying match action");

        match action {
            MatchAction::MarkCaptainHit => teams::mark_captain_hit(&mut state)?,
            MatchAction::MarkTeeShotsComplete => teams::mark_tee_shots_complete(&mut state)?,
            MatchAction::RequestPartner { captain, partner } => {
                teams::request_partner(&mut state, captain, partner)?
            }
            MatchAction::AcceptPartner { partner } => {
                teams::accept_partner(&mut state, partner)?
            }
            MatchAction::DeclinePartner { partner } => {
                teams::decline_partner(&mut state, partner)?
            }
            MatchAction::DeclareSolo { player, style } => {
                teams::declare_solo(&mut state, player, style)?
            }
            MatchAction::AardvarkRequest { aardvark, target } => {
                teams::aardvark_request_team(&mut state, aardvark, target)?
            }
            MatchAction::AardvarkResponse { accept } => {
                teams::respond_to_aardvark(&mut state, accept).map(|_| ())?
            }
            MatchAction::OfferDouble { player } => wager::offer_double(&mut state, player)?,
            MatchAction::AcceptDouble { player } => wager::accept_double(&mut state, player)?,
            MatchAction::DeclineDouble { player } => wager::decline_double(&mut state, player)?,
            MatchAction::InvokeFloat { captain } => wager::invoke_float(&mut state, captain)?,
            MatchAction::DeclineOption { captain } => {
                wager::decline_option(&mut state, captain)?
            }
            MatchAction::SetJoesSpecial { goat, value } => {
                wager::set_joes_special(&mut state, goat, value)?
            }
            MatchAction::SelectRotation {
                hole_number,
                goat,
                position,
            } => select_rotation(&mut state, hole_number, goat, position)?,
        }

        Ok(snapshot(&state))
    }
}
