//! In-memory match store.
//!
//! Matches live behind `Arc<Mutex<..>>` handles in a concurrent map, and can
//! round-trip through an opaque JSON blob for callers that persist state
//! elsewhere between requests.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::state::MatchState;
use crate::error::EngineError;

#[derive(Default)]
pub struct MatchRepository {
    matches: DashMap<Uuid, Arc<Mutex<MatchState>>>,
}

impl MatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new match under a fresh id.
    pub fn insert(&self, state: MatchState) -> Uuid {
        let id = Uuid::new_v4();
        self.matches.insert(id, Arc::new(Mutex::new(state)));
        id
    }

    /// Handle to a stored match.
    pub fn get(&self, id: Uuid) -> Result<Arc<Mutex<MatchState>>, EngineError> {
        self.matches
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(EngineError::MatchNotFound(id))
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.matches.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Serialize a stored match to an opaque blob.
    pub fn export_blob(&self, id: Uuid) -> Result<String, EngineError> {
        let handle = self.get(id)?;
        let state = handle.lock();
        Ok(serde_json::to_string(&*state)?)
    }

    /// Restore a match from a blob under a new id.
    pub fn import_blob(&self, blob: &str) -> Result<Uuid, EngineError> {
        let state: MatchState = serde_json::from_str(blob)?;
        Ok(self.insert(state))
    }
}
