//! Match orchestration service: repository lookup, typed actions, hole
//! completion with replay detection, and read-side views.
//!
//! All rule decisions live in `domain`; this layer owns match identity,
//! locking, idempotency, and logging.

mod actions;


pub use actions::MatchAction;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::match_play::{
    commit_hole, next_rotation_preview, start_match, HoleSubmission,
};
use crate::domain::player::{Player, PlayerId};
use crate::domain::rotation::derive_rotation_seed;
use crate::domain::rules::GameConfig;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::HoleRecord;
use crate::domain::wager::{players_missing_solo, wager_preview, WagerPreview};
use crate::error::EngineError;
use crate::errors::domain::DomainError;
use crate::services::repository::MatchRepository;

#[derive(Default)]
pub struct MatchFlowService {
    repo: MatchRepository,
}

impl MatchFlowService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> &MatchRepository {
        &self.repo
    }

    /// Create a match and open hole 1.
    ///
    /// With no explicit seating, the opening rotation is shuffled from a
    /// seed derived from `match_seed`, so match creation is reproducible.
    pub fn create_match(
        &self,
        config: GameConfig,
        players: Vec<Player>,
        seating: Option<Vec<PlayerId>>,
        match_seed: u64,
    ) -> Result<(Uuid, MatchSnapshot), EngineError> {
        let state = start_match(
            config,
            players,
            seating,
            derive_rotation_seed(match_seed),
        )?;
        let view = snapshot(&state);
        let id = self.repo.insert(state);
        info!(
            match_id = %id,
            players = view.standings.len(),
            captain = ?view.header.captain,
            "match created"
        );
        Ok((id, view))
    }

    /// Commit a hole submission, returning the immutable record.
    ///
    /// Replays are idempotent: resubmitting an already-committed hole with
    /// the same scores returns the stored record without touching state.
    pub fn complete_hole(
        &self,
        match_id: Uuid,
        submission: &HoleSubmission,
    ) -> Result<HoleRecord, EngineError> {
        let handle = self.repo.get(match_id)?;
        let mut state = handle.lock();

        if let Some(record) = state.record_for(submission.hole_number) {
            if record.scores == submission.scores {
                debug!(
                    match_id = %match_id,
                    hole = submission.hole_number,
                    "hole already committed; returning stored record"
                );
                return Ok(record.clone());
            }
            return Err(DomainError::sequence(format!(
                "hole {} was already committed with different scores",
                submission.hole_number
            ))
            .into());
        }

        let record = commit_hole(&mut state, submission)?;
        info!(
            match_id = %match_id,
            hole = record.hole_number,
            winner = ?record.winner,
            final_wager = record.final_wager,
            "hole committed"
        );

        if let Some(deadline) = state.config.solo_required_through {
            // Warn exactly once, as the deadline hole is committed.
            if record.hole_number == deadline {
                let missing = players_missing_solo(&state);
                if !missing.is_empty() {
                    warn!(
                        match_id = %match_id,
                        players = ?missing,
                        deadline,
                        "players never went solo by the required hole"
                    );
                }
            }
        }
        Ok(record)
    }

    /// Current wager facts for the hole in progress.
    pub fn wager_preview(&self, match_id: Uuid) -> Result<WagerPreview, EngineError> {
        let handle = self.repo.get(match_id)?;
        let state = handle.lock();
        Ok(wager_preview(&state)?)
    }

    /// Rotation and captain for the next hole, absent a Goat override.
    pub fn next_rotation(
        &self,
        match_id: Uuid,
    ) -> Result<(Vec<PlayerId>, PlayerId), EngineError> {
        let handle = self.repo.get(match_id)?;
        let state = handle.lock();
        Ok(next_rotation_preview(&state)?)
    }

    /// Players who have not gone solo yet (4-player matches).
    pub fn missing_solo(&self, match_id: Uuid) -> Result<Vec<PlayerId>, EngineError> {
        let handle = self.repo.get(match_id)?;
        let state = handle.lock();
        Ok(players_missing_solo(&state))
    }

    /// Observable state of a match.
    pub fn snapshot(&self, match_id: Uuid) -> Result<MatchSnapshot, EngineError> {
        let handle = self.repo.get(match_id)?;
        let state = handle.lock();
        Ok(snapshot(&state))
    }
}
