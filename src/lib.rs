#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for Wolf Goat Pig, a 4-6 player golf wagering game.
//!
//! The `domain` layer is pure state-in/state-out rules: rotation, team
//! formation, wager escalation, and exact zero-sum scoring. The `services`
//! layer adds match identity, storage, idempotent hole completion, and
//! logging on top.

pub mod domain;
pub mod error;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use domain::{
    goat_ids, players_missing_solo, snapshot, wager_preview, GameConfig, HoleRecord,
    HoleSubmission, HoleWinner, MatchSnapshot, MatchState, MatchStatus, Phase, Player, PlayerId,
    Points, SoloStyle, TeamSide, Teams, TeamsSpec, WagerPreview,
};
pub use error::EngineError;
pub use errors::domain::{DomainError, NotFoundKind, ViolationKind};
pub use services::{MatchAction, MatchFlowService, MatchRepository};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
