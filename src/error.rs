//! Service-level error type returned by `MatchFlowService`.

use thiserror::Error;
use uuid::Uuid;

use crate::errors::domain::DomainError;

/// Errors surfaced by the orchestration layer.
///
/// Rule violations stay typed as [`DomainError`] so callers can branch on the
/// violated precondition; only concerns that exist above the pure engine
/// (unknown match ids, blob encoding) get their own variants.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("match not found: {0}")]
    MatchNotFound(Uuid),

    #[error("match state blob could not be encoded/decoded: {0}")]
    Blob(#[from] serde_json::Error),
}

impl EngineError {
    /// The underlying domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            EngineError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
