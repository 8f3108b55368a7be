use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Rules for a round, loaded from `fivesome.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub hole_count: usize,
    /// 0-based hole on which the one-time doubling offer is made.
    pub doubling_hole: usize,
    pub points: PointValues,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            hole_count: 18,
            doubling_hole: 14,
            points: PointValues::default(),
        }
    }
}

/// Point units awarded by the side-match rule before the stake multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointValues {
    /// Won or lost by each member of a pair in the Left vs Right match.
    pub team_points: i32,
    /// Won or lost by Center against each individual opponent.
    pub center_points: i32,
}

impl Default for PointValues {
    fn default() -> Self {
        Self {
            team_points: 1,
            center_points: 1,
        }
    }
}

impl GameRules {
    pub const DEFAULT_FILE: &'static str = "fivesome.toml";
    /// Upper bound on `hole_count`.
    pub const MAX_HOLES: usize = 1_000;
    /// Upper bound on each point unit. Together with `MAX_HOLES` this keeps
    /// doubled per-hole deltas and round totals well inside `i32`.
    pub const MAX_POINT_UNITS: i32 = 1_000;

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.hole_count == 0 {
            return Err(RulesError::NoHoles);
        }
        if self.doubling_hole >= self.hole_count {
            return Err(RulesError::DoublingHoleOutOfRange {
                doubling_hole: self.doubling_hole,
                hole_count: self.hole_count,
            });
        }
        if self.hole_count > Self::MAX_HOLES {
            return Err(RulesError::TooManyHoles {
                hole_count: self.hole_count,
                max: Self::MAX_HOLES,
            });
        }
        for (field, value) in [
            ("team_points", self.points.team_points),
            ("center_points", self.points.center_points),
        ] {
            if value <= 0 {
                return Err(RulesError::NonPositivePoints { field });
            }
            if value > Self::MAX_POINT_UNITS {
                return Err(RulesError::PointsTooLarge {
                    field,
                    max: Self::MAX_POINT_UNITS,
                });
            }
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RulesError> {
        toml::from_str(content).map_err(|e| RulesError::Parse(e.to_string()))
    }

    /// Load rules from `fivesome.toml` in the working directory.
    pub fn load() -> Self {
        Self::load_from(Self::DEFAULT_FILE)
    }

    /// Load rules from `path` if it exists, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut rules = match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(rules) => {
                    tracing::info!(path = %path.display(), "Loaded rules");
                    rules
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "{e}, using default rules");
                    GameRules::default()
                },
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No rules file found, using defaults");
                GameRules::default()
            },
        };

        rules.apply_overrides(|key| std::env::var(key).ok());
        rules
    }

    /// Apply `FIVESOME_*` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FIVESOME_HOLE_COUNT")
            && let Ok(n) = val.trim().parse::<usize>()
        {
            self.hole_count = n;
        }
        if let Some(val) = lookup("FIVESOME_DOUBLING_HOLE")
            && let Ok(n) = val.trim().parse::<usize>()
        {
            self.doubling_hole = n;
        }
    }
}
