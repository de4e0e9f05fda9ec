//! Domain-level error type used across the rules engine and the match service.
//!
//! This error type is transport- and storage-agnostic. The service layer
//! returns `Result<T, crate::error::EngineError>` and converts from
//! `DomainError` using the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The specific rule precondition a rejected operation violated.
///
/// Every mutating operation in the engine fails with exactly one of these
/// kinds; nothing is silently coerced or recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViolationKind {
    /// Action illegal for the current hole/phase.
    Phase,
    /// Rule unavailable for this match size.
    PlayerCount,
    /// Wrong player attempting a privileged action.
    Actor,
    /// Float / solo / rotation-selection already consumed.
    DuplicateUsage,
    /// Malformed team split, out-of-range wager value, roster mismatch.
    InvalidConfiguration,
    /// Hole submitted out of order or already recorded.
    Sequence,
}

impl ViolationKind {
    /// Stable machine-readable code for transports to map onto.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Phase => "PHASE_VIOLATION",
            ViolationKind::PlayerCount => "PLAYER_COUNT_VIOLATION",
            ViolationKind::Actor => "ACTOR_VIOLATION",
            ViolationKind::DuplicateUsage => "DUPLICATE_USAGE_VIOLATION",
            ViolationKind::InvalidConfiguration => "INVALID_CONFIGURATION",
            ViolationKind::Sequence => "SEQUENCE_VIOLATION",
        }
    }
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Match,
    Player,
    Hole,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A named rule precondition was violated.
    Violation(ViolationKind, String),
    /// Missing resource in domain terms.
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Violation(kind, d) => write!(f, "{}: {d}", kind.as_str()),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn violation(kind: ViolationKind, detail: impl Into<String>) -> Self {
        Self::Violation(kind, detail.into())
    }

    pub fn phase(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::Phase, detail.into())
    }

    pub fn player_count(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::PlayerCount, detail.into())
    }

    pub fn actor(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::Actor, detail.into())
    }

    pub fn duplicate_usage(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::DuplicateUsage, detail.into())
    }

    pub fn invalid_configuration(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::InvalidConfiguration, detail.into())
    }

    pub fn sequence(detail: impl Into<String>) -> Self {
        Self::Violation(ViolationKind::Sequence, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The violation kind, if this is a rule violation.
    pub fn kind(&self) -> Option<&ViolationKind> {
        match self {
            DomainError::Violation(kind, _) => Some(kind),
            DomainError::NotFound(_, _) => None,
        }
    }
}
