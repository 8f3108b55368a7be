pub mod error;
pub mod game;
pub mod ledger;
pub mod navigator;
pub mod points;
pub mod registry;
pub mod roster;
pub mod stake;

pub use error::EngineError;
pub use game::{Game, HoleRecord};
pub use navigator::{HoleOutcome, HolePhase, Navigation};
pub use registry::{GameId, GameRegistry};
pub use roster::TeamAssignment;
pub use stake::{DoublingPrompt, FixedAnswer, StakeController};
