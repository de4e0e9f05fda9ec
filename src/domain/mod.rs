//! Domain layer: pure Wolf Goat Pig rules, types, and helpers.

pub mod match_play;
pub mod player;
pub mod points;
pub mod rotation;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod teams;
pub mod validate;
pub mod wager;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_match_play;
#[cfg(test)]
mod tests_teams;

// Re-exports for ergonomics
pub use match_play::{HoleSubmission, TeamsSpec};
pub use player::{goat_ids, Player, PlayerId};
pub use points::Points;
pub use rules::{GameConfig, Phase};
pub use snapshot::{snapshot, MatchSnapshot};
pub use state::{
    HoleRecord, HoleState, HoleWinner, MatchState, MatchStatus, SoloStyle, TeamSide, Teams,
    WagerState,
};
pub use wager::{players_missing_solo, wager_preview, WagerPreview};
