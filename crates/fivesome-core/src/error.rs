use thiserror::Error;

use crate::player::PlayerId;
use crate::team::Side;

/// Problems with who is playing, or with how they were split into sides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{side} team must have {expected} {}", player_noun(.expected))]
    Size {
        side: Side,
        expected: usize,
        actual: usize,
    },
    #[error("{player} is selected in more than one group")]
    Overlap { player: PlayerId },
    #[error("{player} is not playing in this game")]
    UnknownPlayer { player: PlayerId },
    #[error("a game needs exactly {expected} players, got {actual}")]
    PlayerCount { expected: usize, actual: usize },
    #[error("player names must not be empty")]
    EmptyName,
    #[error("{player} is entered more than once")]
    DuplicatePlayer { player: PlayerId },
}

fn player_noun(count: &usize) -> &'static str {
    if *count == 1 { "player" } else { "players" }
}

/// Problems with raw stroke counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Missing, unparsable or non-positive score for a player on a hole.
    #[error("{player} needs a positive score for hole {}", .hole + 1)]
    InvalidScore {
        player: PlayerId,
        hole: usize,
        value: Option<i32>,
    },
    /// Points were requested before every player had a score.
    #[error("no score available for {player}")]
    IncompleteData { player: PlayerId },
}

/// Invalid game rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("hole_count must be > 0")]
    NoHoles,
    #[error("doubling_hole {doubling_hole} must be below hole_count {hole_count}")]
    DoublingHoleOutOfRange {
        doubling_hole: usize,
        hole_count: usize,
    },
    #[error("hole_count {hole_count} must be at most {max}")]
    TooManyHoles { hole_count: usize, max: usize },
    #[error("points.{field} must be > 0")]
    NonPositivePoints { field: &'static str },
    #[error("points.{field} must be at most {max}")]
    PointsTooLarge { field: &'static str, max: i32 },
    #[error("failed to parse rules: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_message_reads_naturally() {
        let err = RosterError::Size {
            side: Side::Left,
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Left team must have 2 players");

        let err = RosterError::Size {
            side: Side::Center,
            expected: 1,
            actual: 0,
        };
        assert_eq!(err.to_string(), "Center team must have 1 player");
    }

    #[test]
    fn invalid_score_reports_one_based_hole() {
        let err = ScoreError::InvalidScore {
            player: "C".to_string(),
            hole: 0,
            value: Some(0),
        };
        assert_eq!(err.to_string(), "C needs a positive score for hole 1");
    }
}
