use thiserror::Error;

use fivesome_core::error::{RosterError, RulesError, ScoreError};

use crate::navigator::HolePhase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Rules(#[from] RulesError),
    /// A transition was requested from a phase that does not allow it.
    #[error("{operation} is not allowed while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: HolePhase,
    },
    #[error("game {id} not found")]
    GameNotFound { id: String },
    #[error("game snapshot error: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Whether the error is a user-input mistake the caller should re-prompt for,
    /// as opposed to a caller breaking the transition protocol.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Roster(_) | Self::Score(_))
    }
}
