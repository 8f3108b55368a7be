use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use fivesome_core::rules::GameRules;
use fivesome_engine::{EngineError, FixedAnswer, Game};

use crate::CliError;

/// A round written down hole by hole.
#[derive(Debug, Clone, Deserialize)]
pub struct Scorecard {
    pub players: Vec<String>,
    #[serde(default)]
    pub holes: Vec<HoleCard>,
}

/// Teams, strokes and the doubling answer for one hole.
#[derive(Debug, Clone, Deserialize)]
pub struct HoleCard {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub center: Vec<String>,
    pub scores: BTreeMap<String, i32>,
    /// Answer to the doubling offer; only read on the doubling hole.
    #[serde(default)]
    pub double: bool,
}

impl Scorecard {
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Play every hole on the card through a fresh game.
    pub fn play(&self, rules: &GameRules) -> Result<Game, CliError> {
        let mut game = Game::from_names(&self.players, rules.clone())?;
        if self.holes.len() > game.hole_count() {
            return Err(CliError::TooManyHoles {
                holes: self.holes.len(),
                hole_count: game.hole_count(),
            });
        }

        for (index, card) in self.holes.iter().enumerate() {
            play_hole(&mut game, card).map_err(|source| CliError::Hole {
                hole: index + 1,
                source,
            })?;
        }

        tracing::info!(
            holes = self.holes.len(),
            finished = game.is_finished(),
            "Scorecard played"
        );
        Ok(game)
    }
}

fn play_hole(game: &mut Game, card: &HoleCard) -> Result<(), EngineError> {
    game.submit_roster(&card.left, &card.right, &card.center)?;
    for (player, &strokes) in &card.scores {
        game.record_score(player, strokes)?;
    }
    game.submit_scores()?;
    game.finalize_hole(&mut FixedAnswer(card.double))?;
    Ok(())
}
