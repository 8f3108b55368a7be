pub mod report;
pub mod scorecard;

use std::path::Path;

use thiserror::Error;

use fivesome_core::error::RulesError;
use fivesome_core::rules::GameRules;
use fivesome_engine::EngineError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scorecard: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{path}: {source}")]
    Rules {
        path: String,
        #[source]
        source: RulesError,
    },
    #[error("hole {hole}: {source}")]
    Hole {
        /// 1-based, as printed on the card.
        hole: usize,
        #[source]
        source: EngineError,
    },
    #[error("scorecard has {holes} holes but the round only has {hole_count}")]
    TooManyHoles { holes: usize, hole_count: usize },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rules for a run.
///
/// A file named on the command line must exist, parse and validate. Without
/// one, `./fivesome.toml` is used when present and defaults otherwise. Env
/// overrides apply either way.
pub fn load_rules(path: Option<&Path>) -> Result<GameRules, CliError> {
    let rules = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let mut rules =
                GameRules::from_toml_str(&content).map_err(|source| CliError::Rules {
                    path: path.display().to_string(),
                    source,
                })?;
            rules.apply_overrides(|key| std::env::var(key).ok());
            tracing::info!(path = %path.display(), "Loaded rules");
            rules
        },
        None => GameRules::load(),
    };
    rules.validate().map_err(EngineError::from)?;
    Ok(rules)
}
