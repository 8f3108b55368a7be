use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fivesome_core::rules::GameRules;

use crate::error::EngineError;
use crate::game::Game;
use crate::navigator::Navigation;

/// Unique identifier for an active game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The games currently being played.
///
/// Callers hold a [`GameId`] and pass it explicitly; a game that is rewound
/// past its first hole is dropped from the collection.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: HashMap<GameId, Game>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game for the given player names.
    pub fn create_game<I, S>(&mut self, names: I, rules: GameRules) -> Result<GameId, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let game = Game::from_names(names, rules).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected new game");
        })?;
        let id = self.insert(game);
        tracing::info!(game = %id, "Game created");
        Ok(id)
    }

    /// Track an existing game, e.g. one restored from a snapshot.
    pub fn insert(&mut self, game: Game) -> GameId {
        let id = GameId::generate();
        tracing::debug!(
            game = %id,
            hole = game.current_hole(),
            players = ?game.players().players(),
            "Game registered"
        );
        self.games.insert(id.clone(), game);
        id
    }

    pub fn get(&self, id: &GameId) -> Result<&Game, EngineError> {
        self.games.get(id).ok_or_else(|| not_found(id))
    }

    pub fn get_mut(&mut self, id: &GameId) -> Result<&mut Game, EngineError> {
        self.games.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Step a game back one hole, dropping it if that abandons it.
    pub fn go_back(&mut self, id: &GameId) -> Result<Navigation, EngineError> {
        let navigation = self.get_mut(id)?.go_back()?;
        if navigation == Navigation::Abandoned {
            self.games.remove(id);
            tracing::info!(game = %id, "Abandoned game removed");
        }
        Ok(navigation)
    }

    pub fn remove(&mut self, id: &GameId) -> Option<Game> {
        self.games.remove(id)
    }

    pub fn contains(&self, id: &GameId) -> bool {
        self.games.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &GameId> {
        self.games.keys()
    }
}

fn not_found(id: &GameId) -> EngineError {
    EngineError::GameNotFound { id: id.0.clone() }
}
