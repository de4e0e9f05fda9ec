//! Orchestration layer over the pure domain engine.

pub mod match_flow;
pub mod repository;

pub use match_flow::{MatchAction, MatchFlowService};
pub use repository::MatchRepository;
